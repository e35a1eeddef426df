/// A scalar cell value as seen by predicates.
///
/// Rows hand these out by column index; predicates never see the row's
/// storage, only the values it yields. Integers and floats are kept apart so
/// that range and comparison predicates can honor each type's semantics.
///
/// # Examples
///
/// ```
/// use sift_lang::Value;
///
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing or explicit null cell
    Null,

    /// Boolean cell
    Boolean(bool),

    /// Integer cell (preserved separately from floats)
    Integer(i64),

    /// Floating-point cell
    Float(f64),

    /// UTF-8 text cell
    String(String),
}

impl Value {
    /// Get as float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as integer, truncating floats
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Float(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// String rendering of the cell, as used for pattern matching
    pub fn as_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Null => "null".to_string(),
        }
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// True for numeric cells (integer or float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }
}
