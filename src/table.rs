//! The table capability set the core consumes (§6), and [`Table`]: the
//! minimal owned representation `read_table` hands back.
//!
//! Higher-level table operations — sorting, joins, filters — are out of
//! scope; `Table` is just an ordered, named list of columns of equal length.

use crate::column::{ColumnData, ColumnSource};
use crate::error::{Result, SawError};

/// The capability set an external table implementation must provide.
pub trait TableSource {
    fn name(&self) -> &str;
    fn row_count(&self) -> usize;
    fn columns(&self) -> Vec<&dyn ColumnSource>;

    fn column_count(&self) -> usize {
        self.columns().len()
    }
}

/// A named, ordered collection of equal-length typed columns.
pub struct Table {
    name: String,
    columns: Vec<ColumnData>,
}

impl Table {
    /// Builds a table, validating that every column has the same length and
    /// that column ids (display names) are unique within the table.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnData>) -> Result<Self> {
        let row_count = columns.first().map(ColumnSource::len).unwrap_or(0);
        for column in &columns {
            if column.len() != row_count {
                return Err(SawError::InvalidArgument(format!(
                    "column '{}' has length {} but table row count is {}",
                    column.name(),
                    column.len(),
                    row_count
                )));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(SawError::InvalidArgument(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
        }

        Ok(Table {
            name: name.into(),
            columns,
        })
    }

    pub fn column(&self, index: usize) -> Option<&ColumnData> {
        self.columns.get(index)
    }

    pub fn into_columns(self) -> Vec<ColumnData> {
        self.columns
    }
}

impl TableSource for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> usize {
        self.columns.first().map(ColumnSource::len).unwrap_or(0)
    }

    fn columns(&self) -> Vec<&dyn ColumnSource> {
        self.columns.iter().map(|c| c as &dyn ColumnSource).collect()
    }
}
