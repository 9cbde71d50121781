//! Cell values. A cell is either a number or text, decided once at load time
//! by the schema rather than re-parsed on every comparison.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric reading of the value, if it has one. `Number` is free; `Text`
    /// parses on demand (the fallback for columns outside the schema).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }
}

// Bit equality for numbers so tables containing floats can be compared in
// filters and tests.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_as_f64() {
        assert_eq!(Value::Number(4.9).as_f64(), Some(4.9));
    }

    #[test]
    fn test_text_as_f64_parses_numbers() {
        assert_eq!(Value::Text("199".to_string()).as_f64(), Some(199.0));
        assert_eq!(Value::Text(" 4.6 ".to_string()).as_f64(), Some(4.6));
        assert_eq!(Value::Text("apple".to_string()).as_f64(), None);
    }

    #[test]
    fn test_display_round_numbers_have_no_trailing_zero() {
        assert_eq!(Value::Number(999.0).to_string(), "999");
        assert_eq!(Value::Number(4.9).to_string(), "4.9");
    }

    #[test]
    fn test_number_never_equals_text() {
        assert_ne!(Value::Number(1.0), Value::Text("1".to_string()));
    }
}
