//! Load tabular data from a CSV file, filter rows by a single comparison
//! condition, and aggregate one numeric column.
//!
//! The pipeline is load → filter → aggregate → render; every stage takes an
//! immutable [`table::Table`] and produces a new value. See [`loader`] for
//! the numeric-column schema and [`filter`] for the comparison policy.

pub mod aggregate;
pub mod condition;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod table;
pub mod value;

pub use error::{Error, Result};
