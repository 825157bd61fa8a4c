use crate::{
    ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult,
};

/// Parses the text of an integer literal.
///
/// ## Errors
/// Returns `LiteralTooLarge` if the literal does not fit in an `i64`.
///
/// ## Example
/// ```
/// use frosting::{error::RuntimeError, util::num::parse_integer};
///
/// assert_eq!(parse_integer("42", 1).unwrap(), 42);
///
/// let err = parse_integer("99999999999999999999", 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 3, .. }));
/// ```
pub fn parse_integer(text: &str, line: usize) -> EvalResult<i64> {
    text.parse()
        .map_err(|_| RuntimeError::LiteralTooLarge { literal: text.to_string(),
                                                     line })
}

/// Parses the text of an integer literal used as a process exit code.
///
/// ## Errors
/// Returns `LiteralTooLarge` if the literal does not fit in an `i32`.
pub fn parse_exit_code(text: &str, line: usize) -> EvalResult<i32> {
    text.parse()
        .map_err(|_| RuntimeError::LiteralTooLarge { literal: text.to_string(),
                                                     line })
}

/// Applies an arithmetic operator to two integers.
///
/// Division truncates toward zero. Comparison operators are not handled here.
///
/// ## Errors
/// - `DivisionByZero` when dividing by zero.
/// - `Overflow` when the result leaves the `i64` range.
///
/// ## Example
/// ```
/// use frosting::{ast::BinaryOperator, error::RuntimeError, util::num::checked_arithmetic};
///
/// assert_eq!(checked_arithmetic(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
///
/// let err = checked_arithmetic(BinaryOperator::Mul, i64::MAX, 2, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4 }));
/// ```
pub fn checked_arithmetic(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            left.checked_div(right)
        },
        _ => {
            return Err(RuntimeError::TypeError { details: format!("'{}' is not an arithmetic operator",
                                                                  op.symbol()),
                                                 line });
        },
    };

    result.ok_or(RuntimeError::Overflow { line })
}

/// Converts a truth value to the integer the language uses for it.
#[must_use]
pub fn bool_to_number(value: bool) -> i64 {
    i64::from(value)
}
