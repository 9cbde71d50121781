//! Parsing of `column<op>value` filter conditions.

use std::fmt;

use crate::error::{Error, Result};

/// Comparison operator of a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Gt,
    Lt,
    Eq,
}

impl Op {
    /// Operator characters in match priority order.
    const PRIORITY: [(char, Op); 3] = [('>', Op::Gt), ('<', Op::Lt), ('=', Op::Eq)];

    pub fn parse(s: &str) -> Result<Op> {
        match s {
            ">" => Ok(Op::Gt),
            "<" => Ok(Op::Lt),
            "=" => Ok(Op::Eq),
            other => Err(Error::UnsupportedOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Eq => "=",
        };
        f.write_str(s)
    }
}

/// A parsed filter condition: `price>500` becomes `("price", Gt, "500")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub op: Op,
    pub value: String,
}

impl Condition {
    /// Splits the input at the first operator character found, trying `>`,
    /// then `<`, then `=`. Column and value are whitespace-trimmed. Whether
    /// the column exists in any table is checked at evaluation, not here.
    ///
    /// # Errors
    ///
    /// `InvalidCondition` if no operator is present or the column side is
    /// empty.
    pub fn parse(input: &str) -> Result<Condition> {
        for (ch, op) in Op::PRIORITY {
            if let Some(pos) = input.find(ch) {
                let column = input[..pos].trim();
                let value = input[pos + ch.len_utf8()..].trim();
                if column.is_empty() {
                    return Err(Error::InvalidCondition(input.to_string()));
                }
                return Ok(Condition {
                    column: column.to_string(),
                    op,
                    value: value.to_string(),
                });
            }
        }
        Err(Error::InvalidCondition(input.to_string()))
    }
}
