//! # gander
//!
//! In-memory tabular data: load rectangular string data (usually CSV) into a
//! [`DataFrame`] of named [`Series`], manipulate rows and columns, and compute
//! descriptive statistics.
//!
//! Columns whose cells all parse as numbers become numeric Series; any other
//! column is categorical, storing one integer code per row alongside the
//! labels those codes stand for.
//!
//! ```rust
//! use gander::DataFrame;
//!
//! let mut df = DataFrame::from_rows(&[
//!     vec!["height", "weight", "species"],
//!     vec!["1.2", "10", "cat"],
//!     vec!["0.8", "12", "dog"],
//!     vec!["1.5", "9", "cat"],
//! ]).unwrap();
//!
//! df.drop_rows(&[1]).unwrap();
//! df.standardize();
//!
//! assert_eq!(df.row_count(), 2);
//! assert_eq!(df.columns()[2].label_at(1), Some("cat"));
//! ```

pub mod config;
pub mod dataframe;
pub mod error;
pub mod io;
pub mod series;
pub mod stats;

// Re-export commonly used types
pub use config::{CsvOptions, DisplayConfig, GanderConfig};
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use io::{read_csv, read_csv_from_reader};
pub use series::{Categories, ColumnKind, Series};
pub use stats::Summary;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
