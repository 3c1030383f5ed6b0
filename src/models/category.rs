//! Purchase categories
//!
//! The set of storage categories is fixed. Their order is stable and is used
//! both for menu numbering (1..=4) and for the block order in the purchases
//! file. `CategorySelector` adds the virtual "All" choice used by reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpendbookError;

/// A storage category for purchases
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Clothes,
    Entertainment,
    Other,
}

impl Category {
    /// All storage categories in their fixed order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Clothes,
        Category::Entertainment,
        Category::Other,
    ];

    /// Display label, also used as the block header in the purchases file
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Clothes => "Clothes",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Zero-based position in `Category::ALL`
    pub const fn index(&self) -> usize {
        match self {
            Category::Food => 0,
            Category::Clothes => 1,
            Category::Entertainment => 2,
            Category::Other => 3,
        }
    }

    /// Menu number (1..=4)
    pub const fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Look up a category by its menu number
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=4 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SpendbookError;

    /// Accepts a label (case-insensitive) or a menu number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<u8>() {
            return Self::from_number(number).ok_or_else(|| {
                SpendbookError::Validation(format!("No category with number {}", number))
            });
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpendbookError::Validation(format!("Unknown category: {}", s)))
    }
}

/// Which purchases a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    Single(Category),
    All,
}

impl CategorySelector {
    pub fn label(&self) -> &'static str {
        match self {
            CategorySelector::Single(category) => category.label(),
            CategorySelector::All => "All",
        }
    }

    /// The storage categories this selector spans
    pub fn categories(&self) -> Vec<Category> {
        match self {
            CategorySelector::Single(category) => vec![*category],
            CategorySelector::All => Category::ALL.to_vec(),
        }
    }

    /// Look up by menu number, where 5 means "All"
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            5 => Some(CategorySelector::All),
            n => Category::from_number(n).map(CategorySelector::Single),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        CategorySelector::Single(category)
    }
}

impl FromStr for CategorySelector {
    type Err = SpendbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "5" {
            Ok(CategorySelector::All)
        } else {
            trimmed.parse().map(CategorySelector::Single)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Food", "Clothes", "Entertainment", "Other"]);
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(category.number() as usize, i + 1);
        }
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Category::from_number(1), Some(Category::Food));
        assert_eq!(Category::from_number(4), Some(Category::Other));
        assert_eq!(Category::from_number(0), None);
        assert_eq!(Category::from_number(5), None);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("ENTERTAINMENT".parse::<Category>().unwrap(), Category::Entertainment);
        assert_eq!("2".parse::<Category>().unwrap(), Category::Clothes);
        assert!("9".parse::<Category>().unwrap_err().is_validation());
        assert!("snacks".parse::<Category>().is_err());
    }

    #[test]
    fn test_selector() {
        assert_eq!("all".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!(
            "other".parse::<CategorySelector>().unwrap(),
            CategorySelector::Single(Category::Other)
        );
        assert_eq!(CategorySelector::from_number(5), Some(CategorySelector::All));
        assert_eq!(CategorySelector::from_number(6), None);
        assert_eq!(CategorySelector::All.categories().len(), 4);
        assert_eq!(CategorySelector::All.label(), "All");
    }
}
