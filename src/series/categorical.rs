use std::collections::HashMap;

/// Bidirectional label/code encoding of a categorical Series.
///
/// Codes are consecutive integers starting at 0, assigned in the order in
/// which each distinct label first occurs. `labels[code]` is the label of
/// `code`, and `codes[label]` is its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categories {
    /// Code to label, indexed by code
    labels: Vec<String>,

    /// Label to code
    codes: HashMap<String, usize>,
}

impl Categories {
    /// Encode `values`, returning the encoding and the code of every position
    pub(crate) fn encode<S: AsRef<str>>(values: &[S]) -> (Self, Vec<f64>) {
        let mut labels = Vec::new();
        let mut codes: HashMap<String, usize> = HashMap::new();
        let mut encoded = Vec::with_capacity(values.len());

        for value in values {
            let value = value.as_ref();
            let code = match codes.get(value) {
                Some(&code) => code,
                None => {
                    let code = labels.len();
                    codes.insert(value.to_string(), code);
                    labels.push(value.to_string());
                    code
                }
            };
            encoded.push(code as f64);
        }

        (Categories { labels, codes }, encoded)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in code order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label for a code value, `None` if the value is not a valid code
    pub fn label(&self, code: f64) -> Option<&str> {
        if code < 0.0 || code.fract() != 0.0 {
            return None;
        }
        self.labels.get(code as usize).map(String::as_str)
    }

    /// Code for a label
    pub fn code(&self, label: &str) -> Option<f64> {
        self.codes.get(label).map(|&code| code as f64)
    }

    /// Occurrence count per label for the given codes.
    ///
    /// Labels that no longer occur (e.g. after row drops) are left out.
    pub(crate) fn histogram(&self, values: &[f64]) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for &code in values {
            if let Some(label) = self.label(code) {
                *counts.entry(label.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}
