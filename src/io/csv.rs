use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::CsvOptions;
use crate::error::Result;
use crate::DataFrame;

/// Read a CSV file into a DataFrame with default options
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    log::debug!("reading CSV from {}", path.as_ref().display());
    read_csv_from_reader(file)
}

/// Read CSV text from any reader into a DataFrame with default options
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<DataFrame> {
    read_csv_with_options(reader, &CsvOptions::default())
}

/// Read CSV text from a reader into a DataFrame.
///
/// Records are passed to [`DataFrame::from_rows`] unchanged, so header
/// detection and the equal-length check happen there rather than in the
/// CSV reader.
pub fn read_csv_with_options<R: Read>(reader: R, options: &CsvOptions) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .comment(options.comment)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|field| field.to_string()).collect::<Vec<_>>());
    }

    DataFrame::from_rows(&rows)
}
