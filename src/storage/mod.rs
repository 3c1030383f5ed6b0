//! Storage layer for Spendbook
//!
//! Persists the ledger to a single line-oriented text file. Saving replaces
//! the whole file; loading builds a fresh ledger and never touches the one
//! currently in memory.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, DecodedLedger, SkippedEntry};
pub use file_io::{read_text_required, write_text_atomic};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SpendbookError;
use crate::models::Ledger;

/// Default purchases file name, relative to the working directory
pub const DEFAULT_PURCHASES_FILE: &str = "purchases.txt";

/// Reads and writes the purchases file
#[derive(Debug, Clone)]
pub struct PurchaseStore {
    path: PathBuf,
}

impl PurchaseStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the purchases file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the purchases file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger from disk
    ///
    /// # Errors
    ///
    /// `MissingPersistenceFile` when there is no file, `CorruptPersistedBalance`
    /// when its first line is not an amount.
    pub fn load(&self) -> Result<DecodedLedger, SpendbookError> {
        let text = read_text_required(&self.path)?;
        let decoded = decode(&text)?;
        info!(
            path = %self.path.display(),
            purchases = decoded.ledger.purchase_count(),
            skipped = decoded.skipped.len(),
            "purchases loaded"
        );
        Ok(decoded)
    }

    /// Load the ledger, starting empty if the file doesn't exist yet
    pub fn load_or_default(&self) -> Result<DecodedLedger, SpendbookError> {
        match self.load() {
            Err(SpendbookError::MissingPersistenceFile(_)) => Ok(DecodedLedger {
                ledger: Ledger::new(),
                skipped: Vec::new(),
            }),
            other => other,
        }
    }

    /// Save the ledger to disk, replacing the previous file
    pub fn save(&self, ledger: &Ledger) -> Result<(), SpendbookError> {
        write_text_atomic(&self.path, &encode(ledger))?;
        info!(
            path = %self.path.display(),
            purchases = ledger.purchase_count(),
            "purchases saved"
        );
        Ok(())
    }
}
