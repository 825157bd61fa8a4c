use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, TokenKind},
        value::{core::Value, frame::Frame},
    },
    util::num::parse_integer,
};

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Resolves a literal token to a value.
    ///
    /// Integers are parsed, strings are borrowed and identifiers are looked up
    /// in `frame`. Keywords are not values.
    ///
    /// # Example
    /// ```
    /// use frosting::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::lex,
    ///     value::{core::Value, frame::Frame},
    /// };
    ///
    /// type Ctx = Context<'static, 'static, Vec<u8>>;
    ///
    /// let lexed = lex("x 12");
    /// let mut frame = Frame::new();
    /// frame.set("x", Value::Text("hi"));
    ///
    /// assert_eq!(Ctx::resolve_literal(&lexed.tokens[0], &frame).unwrap(), Value::Text("hi"));
    /// assert_eq!(Ctx::resolve_literal(&lexed.tokens[1], &frame).unwrap(), Value::Number(12));
    /// ```
    pub fn resolve_literal(token: &Token<'src>, frame: &Frame<'src>) -> EvalResult<Value<'src>> {
        match token.kind {
            TokenKind::Integer => parse_integer(token.text, token.line).map(Value::Number),
            TokenKind::String => Ok(Value::Text(token.text)),
            TokenKind::Identifier => {
                frame.get(token.text)
                     .ok_or_else(|| RuntimeError::UnknownVariable { name: token.text.to_string(),
                                                                    line: token.line, })
            },
            _ => Err(RuntimeError::TypeError { details: format!("keyword '{}' is not a value",
                                                                token.text),
                                               line:    token.line, }),
        }
    }
}

/// Extracts the identifier a keyword expects as its first argument.
///
/// # Errors
/// Returns `InvalidArguments` if `arg` is missing or is not a bare name.
pub fn expect_name<'a, 'src>(keyword: &str,
                             arg: Option<&'a Expr<'src>>,
                             line: usize)
                             -> EvalResult<&'a Token<'src>> {
    match arg {
        Some(Expr::Literal(token)) if token.kind == TokenKind::Identifier => Ok(token),
        Some(other) => Err(RuntimeError::InvalidArguments { keyword: keyword.to_string(),
                                                            details: "expected a name".to_string(),
                                                            line:    other.line(), }),
        None => Err(RuntimeError::InvalidArguments { keyword: keyword.to_string(),
                                                     details: "expected a name, found nothing".to_string(),
                                                     line }),
    }
}
