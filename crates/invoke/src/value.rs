//! Dynamically typed values passed to and returned from call targets.

use std::fmt;

use crate::InvokeError;

/// Result of invoking any call target.
pub type CallResult = Result<Value, InvokeError>;

/// An argument or return value of unconstrained type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

/// Fetch the argument at `index`, failing the way an under-supplied call does.
#[inline]
pub fn nth_arg(args: &[Value], index: usize) -> Result<&Value, InvokeError> {
    args.get(index).ok_or(InvokeError::ArgumentCount {
        expected: index + 1,
        given: args.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_arg_present() {
        let args = [Value::Int(1), Value::from("two")];
        assert_eq!(nth_arg(&args, 1).unwrap(), &Value::Str("two".to_string()));
    }

    #[test]
    fn test_nth_arg_missing_reports_counts() {
        let args = [Value::Int(1)];
        assert_eq!(
            nth_arg(&args, 2),
            Err(InvokeError::ArgumentCount {
                expected: 3,
                given: 1
            })
        );
    }

    #[test]
    fn test_display_nested_list() {
        let value = Value::List(vec![Value::Int(1), Value::Null, Value::List(vec![true.into()])]);
        assert_eq!(value.to_string(), "[1, null, [true]]");
    }
}
