// file: src/utils/validation.rs
// description: input and configuration validation helpers
// reference: input validation patterns

use crate::error::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref SQL_IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$").expect("SQL_IDENTIFIER regex is valid");
}

pub struct Validator;

impl Validator {
    /// Table and column names are interpolated into SQL, so only plain
    /// identifiers are accepted.
    pub fn validate_identifier(name: &str) -> Result<()> {
        if !SQL_IDENTIFIER.is_match(name) {
            return Err(SearchError::Validation(format!(
                "Invalid SQL identifier: {:?}",
                name
            )));
        }
        Ok(())
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(SearchError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SearchError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(SearchError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_file_stem(stem: &str) -> Result<()> {
        if stem.trim().is_empty() {
            return Err(SearchError::Validation(
                "File name cannot be empty".to_string(),
            ));
        }

        if stem.contains(['/', '\\']) || stem == "." || stem == ".." {
            return Err(SearchError::Validation(format!(
                "File name must not contain path components: {}",
                stem
            )));
        }

        Ok(())
    }

    /// Surnames are single-line values; control characters in a prefix are
    /// always a caller mistake.
    pub fn validate_prefix(prefix: &str) -> Result<()> {
        if prefix.chars().any(char::is_control) {
            return Err(SearchError::Validation(
                "Search prefix must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }
}
