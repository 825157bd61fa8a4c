/// The builder driver.
///
/// Owns the token cursor, the program under construction and the error list,
/// and dispatches every token to the handlers in the sibling modules.
pub mod core;

/// Parse contexts and line handling.
///
/// Tracks which sequence receives expressions and closes keyword calls and
/// variable bindings at the end of their line.
pub mod context;

/// Operators and parenthesized groups.
///
/// Folds operators left to right over the values already produced and
/// resolves right-hand sides deferred until a group closes.
pub mod binary;

/// Function definitions.
///
/// Handles `func name params...` headers and the `end` that closes a body.
pub mod function;

pub use self::core::{MAX_CALL_ARGUMENTS, ParseResult, Parsed, parse, parse_with_limit};
