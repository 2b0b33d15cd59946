//! Configuration for loading and rendering DataFrames.
//!
//! Every struct has a `Default` and can be read from TOML, with missing
//! keys falling back to their defaults:
//!
//! ```toml
//! [csv]
//! delimiter = 59   # ';'
//! trim = true
//!
//! [display]
//! max_rows = 5
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// CSV reader options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Trim surrounding whitespace from every field
    pub trim: bool,
    /// Lines starting with this byte are skipped
    pub comment: Option<u8>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            comment: None,
        }
    }
}

/// Text rendering options for [`DataFrame`](crate::DataFrame)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of leading rows rendered
    pub max_rows: usize,
    /// Minimum column width in characters
    pub min_column_width: usize,
    /// Decimal places for numeric cells
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: 10,
            min_column_width: 12,
            precision: 2,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GanderConfig {
    pub csv: CsvOptions,
    pub display: DisplayConfig,
}

impl GanderConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read configuration from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
