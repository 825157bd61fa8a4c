use crate::{
    ast::Expr,
    interpreter::{evaluator::core::EvalResult, lexer::TokenKind},
    util::num::parse_exit_code,
};

/// Exit code used when `exit` is not given an integer literal.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Computes the exit code of `exit args...`.
///
/// Only an integer literal as the first argument sets the code; anything
/// else, including no argument, yields [`DEFAULT_EXIT_CODE`].
///
/// # Example
/// ```
/// use frosting::{
///     ast::Expr,
///     interpreter::{evaluator::function::exit::exit_code, lexer::lex, parser::parse},
/// };
///
/// let lexed = lex("exit 3\nexit \"3\"\n");
/// let parsed = parse(&lexed.tokens);
///
/// let codes: Vec<_> = parsed.program
///                           .expressions
///                           .iter()
///                           .map(|expr| match expr {
///                               Expr::FunctionCall { arguments, .. } => exit_code(arguments).unwrap(),
///                               _ => unreachable!(),
///                           })
///                           .collect();
/// assert_eq!(codes, [3, 1]);
/// ```
pub fn exit_code(arguments: &[Expr<'_>]) -> EvalResult<i32> {
    match arguments.first() {
        Some(Expr::Literal(token)) if token.kind == TokenKind::Integer => {
            parse_exit_code(token.text, token.line)
        },
        _ => Ok(DEFAULT_EXIT_CODE),
    }
}
