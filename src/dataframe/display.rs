use std::fmt;

use crate::config::DisplayConfig;

use super::DataFrame;

impl DataFrame {
    /// Render the leading rows as fixed-width text.
    ///
    /// Each column is `max(name length + 2, min_column_width)` characters
    /// wide. Numeric cells are right-aligned with `precision` decimals;
    /// categorical cells show their label.
    pub fn to_string_with(&self, config: &DisplayConfig) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|s| (s.name().chars().count() + 2).max(config.min_column_width))
            .collect();

        let mut output = String::new();
        if self.columns.is_empty() {
            return output;
        }

        for (series, &width) in self.columns.iter().zip(&widths) {
            let header = format!("{}  ", series.name());
            output.push_str(&format!("{:>width$}", header, width = width));
        }
        output.push('\n');

        let rows = self.row_count().min(config.max_rows);
        for r in 0..rows {
            for (series, &width) in self.columns.iter().zip(&widths) {
                let cell_width = width.saturating_sub(3);
                let cell = match series.label_at(r) {
                    Some(label) => format!("{:>w$}", label, w = cell_width),
                    None => format!(
                        "{:>w$.p$}",
                        series.values()[r],
                        w = cell_width,
                        p = config.precision
                    ),
                };
                output.push(' ');
                output.push_str(&cell);
                output.push_str("  ");
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&DisplayConfig::default()))
    }
}
