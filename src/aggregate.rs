//! Single-column aggregation: average, minimum, maximum.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFn {
    Avg,
    Min,
    Max,
}

impl AggregateFn {
    /// # Errors
    ///
    /// `UnsupportedAggregation` for any name outside avg/min/max.
    pub fn parse(name: &str) -> Result<AggregateFn> {
        match name {
            "avg" => Ok(AggregateFn::Avg),
            "min" => Ok(AggregateFn::Min),
            "max" => Ok(AggregateFn::Max),
            other => Err(Error::UnsupportedAggregation(other.to_string())),
        }
    }
}

impl fmt::Display for AggregateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AggregateFn::Avg => "avg",
            AggregateFn::Min => "min",
            AggregateFn::Max => "max",
        };
        f.write_str(s)
    }
}

/// A parsed `--aggregate` argument: `rating=avg` becomes `("rating", Avg)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub column: String,
    pub func: AggregateFn,
}

impl AggregateSpec {
    /// # Errors
    ///
    /// `InvalidAggregateSpec` when the `=` is missing or the column side is
    /// empty; `UnsupportedAggregation` for an unknown function name.
    pub fn parse(input: &str) -> Result<AggregateSpec> {
        let (column, func) = input
            .split_once('=')
            .ok_or_else(|| Error::InvalidAggregateSpec(input.to_string()))?;

        let column = column.trim();
        if column.is_empty() {
            return Err(Error::InvalidAggregateSpec(input.to_string()));
        }

        Ok(AggregateSpec {
            column: column.to_string(),
            func: AggregateFn::parse(func.trim())?,
        })
    }
}

/// Reduces `column` across all rows to a single scalar.
///
/// # Errors
///
/// `MissingColumn` if any record lacks the column, `NonNumericValue` if any
/// cell has no numeric reading, `EmptyAggregation` on a table with no rows.
pub fn aggregate(table: &Table, column: &str, func: AggregateFn) -> Result<f64> {
    let mut values = Vec::with_capacity(table.len());
    for record in table.rows() {
        let cell = record
            .get(column)
            .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

        let n = cell.as_f64().ok_or_else(|| Error::NonNumericValue {
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        values.push(n);
    }

    // Division by zero and min/max of nothing are undefined.
    if values.is_empty() {
        return Err(Error::EmptyAggregation);
    }

    let result = match func {
        AggregateFn::Avg => values.iter().sum::<f64>() / values.len() as f64,
        AggregateFn::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregateFn::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    };

    debug!(column, func = %func, rows = values.len(), result, "Aggregation computed");
    Ok(result)
}
