//! In-memory tabular container shared by every pipeline stage.
//!
//! A [`Frame`] is an ordered header row plus string-valued data rows. Stages
//! never mutate a frame in place: each transform returns a new frame and
//! leaves its input intact, so the same frame can feed more than one stage.

use crate::error::RollupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Frame {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A frame with headers but no data rows counts as empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row length must match the header count; readers are configured
    /// non-flexible so ragged input never reaches this point.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn ensure_not_empty(&self) -> Result<(), RollupError> {
        if self.rows.is_empty() {
            Err(RollupError::Validation("Provided table is empty".to_string()))
        } else {
            Ok(())
        }
    }

    /// Resolves `names` to column indices in order, or fails naming every
    /// column the frame is missing.
    pub fn require_columns(&self, names: &[&str]) -> Result<Vec<usize>, RollupError> {
        let mut indices = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            match self.column_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(*name),
            }
        }
        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(RollupError::Validation(format!(
                "Table must contain column(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// Returns a copy of the frame with `values` bound to `name`: appended as
    /// the rightmost column, or overwriting an existing column of that name.
    /// The overwrite path keeps re-running a stage on its own output from
    /// growing duplicate columns.
    pub fn with_column(&self, name: &str, values: Vec<String>) -> Frame {
        debug_assert_eq!(values.len(), self.rows.len());
        let mut frame = self.clone();
        match frame.column_index(name) {
            Some(idx) => {
                for (row, value) in frame.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                frame.headers.push(name.to_string());
                for (row, value) in frame.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        frame
    }

    pub fn truncated(&self, limit: usize) -> Frame {
        Frame {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
        }
    }
}
