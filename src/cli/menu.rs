//! Interactive menu
//!
//! Numbered text menus over any line reader and writer. The session owns the
//! in-memory ledger; loading from the store replaces it only on success.

use std::io::{BufRead, Write};

use tracing::debug;

use super::input::{parse_amount, parse_choice};
use crate::error::SpendbookResult;
use crate::models::{Category, CategorySelector, Ledger};
use crate::reports::{AnalysisReport, BalanceReport, PurchaseListReport};
use crate::storage::PurchaseStore;

const MAIN_MENU: &str = "Choose your action:
1) Add income
2) Add purchase
3) Show list of purchases
4) Balance
5) Save
6) Load
7) Analyze (sort)
0) Exit
";

const ANALYZE_MENU: &str = "How do you want to sort?
1) Sort all purchases
2) Sort by type
3) Sort certain type
4) Back
";

const NO_SUCH_ACTION: &str = "No such action!";
const WRONG_NUMBER: &str = "Wrong number format!";

/// Whether the session keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// An interactive menu session
pub struct Session<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
    store: PurchaseStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty ledger
    pub fn new(input: R, output: W, store: PurchaseStore) -> Self {
        Self {
            input,
            output,
            ledger: Ledger::new(),
            store,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> SpendbookResult<()> {
        loop {
            writeln!(self.output, "{}", MAIN_MENU)?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let flow = match parse_choice(&line) {
                Ok(1) => self.add_income()?,
                Ok(2) => self.add_purchases()?,
                Ok(3) => self.show_purchases()?,
                Ok(4) => self.show_balance()?,
                Ok(5) => self.save()?,
                Ok(6) => self.load()?,
                Ok(7) => self.analyze()?,
                Ok(0) => Flow::Exit,
                _ => {
                    writeln!(self.output, "{}", NO_SUCH_ACTION)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "Bye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its line ending, `None` at end of input
    fn read_line(&mut self) -> SpendbookResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, message: &str) -> SpendbookResult<Option<String>> {
        writeln!(self.output, "{}", message)?;
        self.read_line()
    }

    fn category_menu(&mut self, with_all: bool) -> SpendbookResult<()> {
        let (header, back) = if with_all {
            ("Choose the type of purchases", 6)
        } else {
            ("Choose the type of purchase", 5)
        };
        writeln!(self.output, "{}", header)?;
        for category in Category::ALL {
            writeln!(self.output, "{}) {}", category.number(), category.label())?;
        }
        if with_all {
            writeln!(self.output, "5) All")?;
        }
        writeln!(self.output, "{}) Back", back)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn add_income(&mut self) -> SpendbookResult<Flow> {
        let Some(line) = self.prompt("Enter income:")? else {
            return Ok(Flow::Exit);
        };
        match parse_amount(&line) {
            Ok(amount) => match self.ledger.add_income(amount) {
                Ok(()) => writeln!(self.output, "Income was added!")?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Err(_) => writeln!(self.output, "{}", WRONG_NUMBER)?,
        }
        Ok(Flow::Continue)
    }

    fn add_purchases(&mut self) -> SpendbookResult<Flow> {
        loop {
            self.category_menu(false)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };

            match parse_choice(&line).ok() {
                Some(5) => return Ok(Flow::Continue),
                Some(n) => match Category::from_number(n) {
                    Some(category) => {
                        if self.add_purchase(category)? == Flow::Exit {
                            return Ok(Flow::Exit);
                        }
                    }
                    None => writeln!(self.output, "{}", NO_SUCH_ACTION)?,
                },
                None => writeln!(self.output, "{}", NO_SUCH_ACTION)?,
            }
            writeln!(self.output)?;
        }
    }

    fn add_purchase(&mut self, category: Category) -> SpendbookResult<Flow> {
        let Some(name) = self.prompt("Enter purchase name:")? else {
            return Ok(Flow::Exit);
        };

        let amount = loop {
            let Some(line) = self.prompt("Enter its price:")? else {
                return Ok(Flow::Exit);
            };
            match parse_amount(&line) {
                Ok(amount) => break amount,
                Err(_) => writeln!(self.output, "{}", WRONG_NUMBER)?,
            }
        };

        match self.ledger.add_purchase(category, name, amount) {
            Ok(_) => writeln!(self.output, "Purchase was added!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_purchases(&mut self) -> SpendbookResult<Flow> {
        loop {
            self.category_menu(true)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };

            let choice = parse_choice(&line).ok();
            if choice == Some(6) {
                return Ok(Flow::Continue);
            }
            match choice.and_then(CategorySelector::from_number) {
                Some(selector) => {
                    let report = PurchaseListReport::generate(&self.ledger, selector);
                    write!(self.output, "{}", report.format_terminal())?;
                }
                None => writeln!(self.output, "{}", NO_SUCH_ACTION)?,
            }
            writeln!(self.output)?;
        }
    }

    fn show_balance(&mut self) -> SpendbookResult<Flow> {
        let report = BalanceReport::generate(&self.ledger);
        write!(self.output, "{}", report.format_terminal())?;
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> SpendbookResult<Flow> {
        match self.store.save(&self.ledger) {
            Ok(()) => writeln!(self.output, "Purchases were saved!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> SpendbookResult<Flow> {
        match self.store.load() {
            Ok(decoded) => {
                for entry in &decoded.skipped {
                    writeln!(self.output, "{}", entry.to_error())?;
                }
                self.ledger = decoded.ledger;
                writeln!(self.output, "Purchases were loaded!")?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn analyze(&mut self) -> SpendbookResult<Flow> {
        loop {
            writeln!(self.output, "{}", ANALYZE_MENU)?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Exit);
            };

            let report = match parse_choice(&line) {
                Ok(1) => Some(AnalysisReport::sort_all(&self.ledger)),
                Ok(2) => Some(AnalysisReport::sort_by_type(&self.ledger)),
                Ok(3) => {
                    self.category_menu(false)?;
                    let Some(line) = self.read_line()? else {
                        return Ok(Flow::Exit);
                    };
                    match parse_choice(&line) {
                        Ok(5) => None,
                        Ok(n) => match Category::from_number(n) {
                            Some(category) => {
                                Some(AnalysisReport::sort_category(&self.ledger, category))
                            }
                            None => {
                                writeln!(self.output, "{}", NO_SUCH_ACTION)?;
                                None
                            }
                        },
                        Err(_) => {
                            writeln!(self.output, "{}", NO_SUCH_ACTION)?;
                            None
                        }
                    }
                }
                Ok(4) => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "{}", NO_SUCH_ACTION)?;
                    None
                }
            };

            if let Some(report) = report {
                write!(self.output, "{}", report.format_terminal())?;
            }
            writeln!(self.output)?;
        }
    }
}
