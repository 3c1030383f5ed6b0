//! File I/O utilities with atomic writes
//!
//! Provides whole-file text reads and writes that won't leave a half-written
//! purchases file behind on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SpendbookError;

/// Read a text file, returning `MissingPersistenceFile` if it doesn't exist
pub fn read_text_required<P: AsRef<Path>>(path: P) -> Result<String, SpendbookError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SpendbookError::MissingPersistenceFile(path.to_path_buf()));
    }

    fs::read_to_string(path)
        .map_err(|e| SpendbookError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write a text file atomically (write to temp, then rename)
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), SpendbookError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            SpendbookError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| SpendbookError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| SpendbookError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendbookError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendbookError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        SpendbookError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("purchases.txt");

        let err = read_text_required(&path).unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("purchases.txt");

        write_text_atomic(&path, "0.00\n").unwrap();
        assert_eq!(read_text_required(&path).unwrap(), "0.00\n");
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("purchases.txt");

        write_text_atomic(&path, "a much longer first version\n").unwrap();
        write_text_atomic(&path, "short\n").unwrap();
        assert_eq!(read_text_required(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("purchases.txt");

        write_text_atomic(&path, "0.00\n").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("purchases.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("purchases.txt");

        write_text_atomic(&path, "0.00\n").unwrap();
        assert!(path.exists());
    }
}
