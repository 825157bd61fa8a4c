use std::io::Write;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::checked_arithmetic,
};

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Evaluates an arithmetic operation on two integers.
    ///
    /// The operator must be one of `Add`, `Sub`, `Mul` or `Div`. Division
    /// truncates toward zero.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed integer, or `DivisionByZero`/`Overflow`.
    ///
    /// # Example
    /// ```
    /// use frosting::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// type Ctx = Context<'static, 'static, Vec<u8>>;
    ///
    /// let result = Ctx::eval_scalar_op(BinaryOperator::Sub, 2, 5, 1).unwrap();
    /// assert_eq!(result, Value::Number(-3));
    ///
    /// let err = Ctx::eval_scalar_op(BinaryOperator::Div, 1, 0, 7).unwrap_err();
    /// assert_eq!(err, RuntimeError::DivisionByZero { line: 7 });
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: i64,
                          right: i64,
                          line: usize)
                          -> EvalResult<Value<'src>> {
        checked_arithmetic(op, left, right, line).map(Value::Number)
    }
}
