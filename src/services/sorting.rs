//! Deterministic descending orderings over named amounts

use std::cmp::Ordering;

use crate::models::Money;

/// Sort named amounts by amount, largest first
///
/// Equal amounts are ordered by name in reverse lexicographic order. Entries
/// that are equal on both keys keep their input order.
pub fn sort_descending<K, I>(items: I) -> Vec<(K, Money)>
where
    K: Ord,
    I: IntoIterator<Item = (K, Money)>,
{
    sort_descending_by(items, |a, b| a.cmp(b))
}

/// Like `sort_descending`, with a caller-supplied name ordering
pub fn sort_descending_by<T, I, F>(items: I, mut compare_names: F) -> Vec<(T, Money)>
where
    I: IntoIterator<Item = (T, Money)>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted: Vec<(T, Money)> = items.into_iter().collect();
    sorted.sort_by(|(a_name, a_amount), (b_name, b_amount)| {
        b_amount
            .cmp(a_amount)
            .then_with(|| compare_names(b_name, a_name))
    });
    sorted
}
