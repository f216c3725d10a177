use crate::{ast::LiteralValue, error::RuntimeError, util::num::int_to_float};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these four kinds. Values are
/// plain data: assigning or printing one copies it, so two bindings never
/// share state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer. Comparisons also produce integers (`1` or
    /// `0`).
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// A string of characters.
    Str(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(r) => Self::Float(*r),
            LiteralValue::Char(c) => Self::Char(*c),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns the name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
        }
    }

    /// Maps the value to a branch or loop condition.
    ///
    /// Numbers are truthy when nonzero, chars when not `'\0'` and strings
    /// when non-empty.
    ///
    /// # Example
    /// ```
    /// use mscript::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(-3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::Char('\0').is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Char(c) => *c != '\0',
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Converts a numeric value to an `f64`.
    ///
    /// Returns `None` for chars and strings. Integers too large to convert
    /// exactly produce an error.
    pub fn as_float(&self, line: usize) -> Result<Option<f64>, RuntimeError> {
        match self {
            Self::Integer(n) => int_to_float(*n, line).map(Some),
            Self::Float(r) => Ok(Some(*r)),
            Self::Char(_) | Self::Str(_) => Ok(None),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
