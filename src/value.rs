use std::str::FromStr;

use crate::error::{RecordError, RecordResult};
use crate::field::Field;
use crate::field_type::FieldType;

/// A typed value of one record field, read from or written to a single line.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String {
        s: String
    },
    Integer {
        i: i64
    },
    Number {
        n: f64
    },
    Skipped,
}

impl Value {
    /// Parse `line` according to `field_def`. Numeric fields are trimmed before parsing, string
    /// fields are kept as they are.
    pub(crate) fn new(line: &str, line_number: usize, field_def: &Field) -> RecordResult<Value> {
        match field_def.field_type() {
            FieldType::String => {
                Ok(
                    Value::String {
                        s: line.to_string()
                    }
                )
            }
            FieldType::Integer => {
                let i = i64::from_str(line.trim())
                    .map_err(|_| RecordError::malformed_field(line_number, field_def.name(), line))?;
                Ok(
                    Value::Integer {
                        i
                    }
                )
            }
            FieldType::Number => {
                let n = f64::from_str(line.trim())
                    .map_err(|_| RecordError::malformed_field(line_number, field_def.name(), line))?;
                Ok(
                    Value::Number {
                        n
                    }
                )
            }
            FieldType::Skip => {
                Ok(Value::Skipped)
            }
        }
    }

    pub fn string(s: &str) -> Value {
        Value::String {
            s: s.to_string()
        }
    }

    pub fn integer(i: i64) -> Value {
        Value::Integer {
            i
        }
    }

    pub fn number(n: f64) -> Value {
        Value::Number {
            n
        }
    }

    /// The line this value is persisted as. Numbers always carry a decimal point or an
    /// exponent so they read back as the same value.
    pub(crate) fn to_line(&self) -> String {
        match self {
            Value::String { s } => { s.clone() }
            Value::Integer { i } => { i.to_string() }
            Value::Number { n } => { format!("{:?}", n) }
            Value::Skipped => { String::new() }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String { s } => { Some(s.as_str()) }
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer { i } => { Some(*i) }
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number { n } => { Some(*n) }
            _ => None,
        }
    }
}
