//! Load remark files from a directory
//!
//! Files are named `Level_<score>_Insults.txt` and hold one remark per line.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::book::RemarkBook;
use crate::error::{PasswordRoastError, Result};

const FILE_PATTERN: &str = r"^Level_(\d+)_Insults\.txt$";

/// Trimmed, non-blank lines of a remark file
pub fn parse_remarks(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl RemarkBook {
    /// Read every `Level_<score>_Insults.txt` in `dir`.
    ///
    /// Other files are ignored, as are scores outside 1..=10.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path_str = || Some(dir.display().to_string());

        let file_regex = Regex::new(FILE_PATTERN)
            .map_err(|e| PasswordRoastError::internal(format!("Invalid remark file pattern: {}", e)))?;

        let entries = fs::read_dir(dir)
            .map_err(|e| PasswordRoastError::io(e.to_string(), path_str()))?;

        let mut book = RemarkBook::new();
        for entry in entries {
            let entry = entry.map_err(|e| PasswordRoastError::io(e.to_string(), path_str()))?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(captures) = file_regex.captures(name) else {
                continue;
            };

            let score = match captures[1].parse::<u8>() {
                Ok(score @ 1..=10) => score,
                _ => {
                    tracing::warn!(file = %name, "Ignoring remark file for a score outside 1-10");
                    continue;
                }
            };

            let path = entry.path();
            let content = fs::read_to_string(&path)
                .map_err(|e| PasswordRoastError::io(e.to_string(), Some(path.display().to_string())))?;
            let remarks = parse_remarks(&content);

            tracing::debug!(score, count = remarks.len(), file = %name, "Loaded remarks");
            book.set(score, remarks);
        }

        Ok(book)
    }
}
