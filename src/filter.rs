//! Row filtering against a parsed condition.

use std::cmp::Ordering;

use tracing::debug;

use crate::condition::{Condition, Op};
use crate::error::{Error, Result};
use crate::table::Table;
use crate::value::Value;

/// Returns a new table holding the records that match `condition`, in their
/// original relative order.
///
/// Comparison is numeric when both the cell and the literal have a numeric
/// reading, textual otherwise. Text comparison is case-sensitive; `>` and `<`
/// compare lexicographically.
///
/// # Errors
///
/// `MissingColumn` if any record lacks the condition's column.
pub fn apply_filter(table: &Table, condition: &Condition) -> Result<Table> {
    let mut out = Table::new(table.columns().to_vec());

    for record in table.rows() {
        let cell = record
            .get(&condition.column)
            .ok_or_else(|| Error::MissingColumn(condition.column.clone()))?;

        if matches(cell, condition.op, &condition.value) {
            out.push(record.clone());
        }
    }

    debug!(
        column = %condition.column,
        matched = out.len(),
        total = table.len(),
        "Filter applied"
    );
    Ok(out)
}

/// Parses `condition` and filters in one step.
pub fn filter_by(table: &Table, condition: &str) -> Result<Table> {
    apply_filter(table, &Condition::parse(condition)?)
}

fn matches(cell: &Value, op: Op, literal: &str) -> bool {
    // Numeric when both sides read as numbers; otherwise the cell's rendered
    // text against the raw literal.
    let ord = match (cell.as_f64(), literal.parse::<f64>().ok()) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => Some(cell.to_string().as_str().cmp(literal)),
    };

    match ord {
        None => false,
        Some(ord) => match op {
            Op::Gt => ord == Ordering::Greater,
            Op::Lt => ord == Ordering::Less,
            Op::Eq => ord == Ordering::Equal,
        },
    }
}
