use std::{cmp::Ordering, io::Write};

use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
    util::num::bool_to_number,
};

/// Maps a comparison operator and the ordering of its operands to the truth
/// value of the comparison.
///
/// Arithmetic operators never compare and always yield `false`.
#[must_use]
pub const fn ordering_matches(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Equal => ordering.is_eq(),
        BinaryOperator::Less => ordering.is_lt(),
        BinaryOperator::LessEqual => ordering.is_le(),
        BinaryOperator::Greater => ordering.is_gt(),
        BinaryOperator::GreaterEqual => ordering.is_ge(),
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            false
        },
    }
}

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Evaluates a comparison of the form `left <op> right`.
    ///
    /// Works for any ordered operand type: integers compare numerically,
    /// strings lexicographically by byte. The result is `1` when the
    /// comparison holds and `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use frosting::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// type Ctx = Context<'static, 'static, Vec<u8>>;
    ///
    /// assert_eq!(Ctx::eval_comparison(BinaryOperator::LessEqual, &3, &5), Value::Number(1));
    /// assert_eq!(Ctx::eval_comparison(BinaryOperator::Equal, "b", "a"), Value::Number(0));
    /// ```
    pub fn eval_comparison<T>(op: BinaryOperator, left: &T, right: &T) -> Value<'src>
        where T: Ord + ?Sized
    {
        Value::Number(bool_to_number(ordering_matches(op, left.cmp(right))))
    }
}
