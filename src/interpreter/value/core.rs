use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A runtime value.
///
/// Values are `Copy`: assigning one variable to another copies the value, it
/// never aliases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'src> {
    /// An integer, either parsed from a literal or computed.
    Number(i64),
    /// A string literal's text, without quotes.
    Text(&'src str),
}

impl<'src> Value<'src> {
    /// The name of the value's type for error messages.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
        }
    }

    /// Returns the integer, or a type error naming `what` was expected.
    ///
    /// # Example
    /// ```
    /// use frosting::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(4).as_number("loop bound", 1).unwrap(), 4);
    /// assert!(Value::Text("four").as_number("loop bound", 1).is_err());
    /// ```
    pub fn as_number(self, what: &str, line: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(_) => Err(RuntimeError::TypeError { details: format!("{what} must be a number, found a {}",
                                                                            self.type_name()),
                                                           line }),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
