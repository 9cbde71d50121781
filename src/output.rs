//! Result rendering: grid tables and JSON.
//!
//! Rendering returns strings; the caller decides where they go. Logs never
//! mix into the rendered output.

use serde_json::{Map, json};

use crate::aggregate::AggregateFn;
use crate::error::Result;
use crate::table::Table;

/// Renders a table as a grid with the column names as headers:
///
/// ```text
/// +-------+-------+
/// | brand | price |
/// +=======+=======+
/// | apple | 999   |
/// +-------+-------+
/// ```
pub fn table_to_grid(table: &Table) -> String {
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|record| {
            table
                .columns()
                .iter()
                .map(|col| record.get(col).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    render_grid(table.columns(), &rows)
}

/// Renders an aggregate result as a one-cell grid with the function name as
/// header.
pub fn aggregate_to_grid(func: AggregateFn, value: f64) -> String {
    render_grid(&[func.to_string()], &[vec![value.to_string()]])
}

/// Renders a table as a pretty-printed JSON array of objects, keys in header
/// order.
pub fn table_to_json(table: &Table) -> Result<String> {
    let mut rows = Vec::with_capacity(table.len());
    for record in table.rows() {
        let mut obj = Map::with_capacity(table.columns().len());
        for col in table.columns() {
            let cell = match record.get(col) {
                Some(value) => serde_json::to_value(value)?,
                None => serde_json::Value::Null,
            };
            obj.insert(col.clone(), cell);
        }
        rows.push(serde_json::Value::Object(obj));
    }
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Renders an aggregate result as a one-key JSON object.
pub fn aggregate_to_json(func: AggregateFn, value: f64) -> Result<String> {
    Ok(serde_json::to_string_pretty(
        &json!({ func.to_string(): value }),
    )?)
}

fn render_grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |fill: char| {
        let mut s = String::from("+");
        for &w in &widths {
            s.extend(std::iter::repeat(fill).take(w + 2));
            s.push('+');
        }
        s.push('\n');
        s
    };

    let line = |cells: &[String]| {
        let mut s = String::from("|");
        for (cell, &w) in cells.iter().zip(&widths) {
            s.push(' ');
            s.push_str(cell);
            s.extend(std::iter::repeat(' ').take(w - cell.chars().count() + 1));
            s.push('|');
        }
        s.push('\n');
        s
    };

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push_str(&line(headers));
    out.push_str(&rule('='));
    for row in rows {
        out.push_str(&line(row));
        out.push_str(&rule('-'));
    }
    out
}
