//! Parameter-file ("variables table") loader.
//!
//! One entry per line, any of
//! ```text
//! epsilon = 1e-8
//! epsilon: 1e-8
//! epsilon 1e-8
//! ```
//! `#` starts a comment; blank lines are ignored. Later entries override
//! earlier ones with the same name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use crate::sampling::config::{validate_epsilon, EPSILON_KEY};
use crate::sampling::errors::ConfigError;


/// Reads every `name = value` entry of the file at `path`.
///
/// # Errors
/// - [`ConfigError::Unreadable`]   : file missing or unreadable
/// - [`ConfigError::Malformed`]    : line is not a `name value` pair
/// - [`ConfigError::InvalidValue`] : value does not parse as `f64`
pub fn variables_table(path: &Path) -> Result<HashMap<String, f64>, ConfigError> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(), source })?;

    let mut table = HashMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let (name, value) = split_entry(line)
            .ok_or_else(|| ConfigError::Malformed { path: path.to_path_buf(), line: idx + 1 })?;

        let parsed = value.parse::<f64>().map_err(|_| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            line: idx + 1,
            value: value.to_owned(),
        })?;
        table.insert(name.to_owned(), parsed);
    }

    Ok(table)
}

/// Loads and validates the `epsilon` entry of a parameter file.
pub fn load_epsilon(path: &Path) -> Result<f64, ConfigError> {
    let table = variables_table(path)?;
    let eps = table.get(EPSILON_KEY).copied().ok_or_else(|| ConfigError::MissingKey {
        path: path.to_path_buf(),
        key: EPSILON_KEY.to_owned(),
    })?;
    log::debug!("epsilon {eps} loaded from {path:?}");
    validate_epsilon(eps)
}

fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (name, value) = match line.find(|c: char| c == '=' || c == ':') {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None      => line.split_once(char::is_whitespace)?,
    };

    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() || value.contains(char::is_whitespace) {
        return None;
    }
    Some((name, value))
}
