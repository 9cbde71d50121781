//! In-memory tabular data: an ordered header plus ordered rows.

use std::collections::HashMap;

use crate::value::Value;

/// One row, mapping column name to value. Column order lives on the owning
/// [`Table`], not the record.
pub type Record = HashMap<String, Value>;

/// An ordered sequence of records sharing one header.
///
/// The loader guarantees every record carries exactly the header's key set;
/// filtering clones matching records, so tables are never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_rows(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Table { columns, rows }
    }

    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
