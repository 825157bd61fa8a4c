use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr, OperatorClass},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, frame::Frame},
    },
};

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Reduces an expression to a single value.
    ///
    /// Literals resolve directly, groups are transparent, and operations
    /// reduce both operands before combining them. `depth` counts the
    /// enclosing operations and groups and is checked against the recursion
    /// limit.
    ///
    /// # Parameters
    /// - `expr`: A literal, group or operation.
    /// - `frame`: Variables visible to the expression.
    /// - `depth`: Nesting depth of `expr`; callers start at `0`.
    pub fn reduce(&self,
                  expr: &Expr<'src>,
                  frame: &Frame<'src>,
                  depth: usize)
                  -> EvalResult<Value<'src>> {
        if depth > self.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded { limit: self.recursion_limit,
                                                              line:  expr.line(), });
        }

        match expr {
            Expr::Literal(token) => Self::resolve_literal(token, frame),
            Expr::Grouped(inner) => self.reduce(inner, frame, depth + 1),
            Expr::Operation { lhs, op, rhs, line, .. } => {
                let left = self.reduce(lhs, frame, depth + 1)?;
                let right = self.reduce(rhs, frame, depth + 1)?;
                Self::eval_binary(*op, left, right, *line)
            },
            other => Err(RuntimeError::TypeError { details: "a statement cannot be used as a value".to_string(),
                                                   line:    other.line(), }),
        }
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Both operands must have the same type. Numbers support every
    /// operator; strings only support comparisons, which order them
    /// lexicographically.
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
    /// let sum = Ctx::eval_binary(BinaryOperator::Add, Value::Number(3), Value::Number(4), 1);
    /// assert_eq!(sum.unwrap(), Value::Number(7));
    ///
    /// let less = Ctx::eval_binary(BinaryOperator::Less, Value::Text("a"), Value::Text("b"), 1);
    /// assert_eq!(less.unwrap(), Value::Number(1));
    ///
    /// let mixed = Ctx::eval_binary(BinaryOperator::Equal, Value::Text("1"), Value::Number(1), 1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value<'src>,
                       right: Value<'src>,
                       line: usize)
                       -> EvalResult<Value<'src>> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => match op.class() {
                OperatorClass::Bool => Ok(Self::eval_comparison(op, &a, &b)),
                OperatorClass::Math => Self::eval_scalar_op(op, a, b, line),
            },
            (Value::Text(a), Value::Text(b)) => match op.class() {
                OperatorClass::Bool => Ok(Self::eval_comparison(op, a, b)),
                OperatorClass::Math => Err(RuntimeError::TypeError { details: format!("cannot apply '{}' to strings",
                                                                                      op.symbol()),
                                                                     line }),
            },
            _ => Err(RuntimeError::TypeError { details: format!("cannot apply '{}' to a {} and a {}",
                                                                op.symbol(),
                                                                left.type_name(),
                                                                right.type_name()),
                                               line }),
        }
    }
}
