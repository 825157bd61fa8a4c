//! # frosting
//!
//! frosting is a tiny line-oriented scripting language written in Rust.
//! Source text is scanned into tokens, built into an expression tree and a
//! function table in a single pass, then run by a tree-walking evaluator with
//! integers, strings, variables, functions and `for` loops.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, DEFAULT_RECURSION_LIMIT},
        lexer::lex,
        parser::{Parsed, parse_with_limit},
    },
    util::dump,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expressions, operators, functions and the program.
/// - Keeps leaves as borrowed tokens so no source text is copied.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while preprocessing,
/// lexing, parsing or evaluating code, each with the line it occurred on and
/// a coarse kind that maps to a process exit code.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together preprocessing, lexing, parsing, evaluation and
/// value representations.
pub mod interpreter;
/// General utilities.
///
/// Checked integer helpers shared by the parser and evaluator, and the text
/// dumps used in debug mode.
pub mod util;

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Log the token list and the expression tree at debug level.
    pub debug:           bool,
    /// Maximum depth of nested function calls and nested operands.
    pub recursion_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { debug:           false,
               recursion_limit: DEFAULT_RECURSION_LIMIT, }
    }
}

/// Runs `source` through the scanner, the builder and the evaluator, writing
/// program output to `out`.
///
/// Each phase only starts when the previous one succeeded. When the builder
/// records several errors, all of them are logged and the first one is
/// returned.
///
/// # Returns
/// The code passed to `exit`, or `0` when the program ran to the end.
///
/// # Examples
/// ```
/// use frosting::{Options, error::ErrorKind, execute};
///
/// let mut out = Vec::new();
/// let code = execute("var y = (3 + 2) * 4\nprint \"y is \" y\n", &Options::default(), &mut out);
/// assert_eq!(code.unwrap(), 0);
/// assert_eq!(out, b"y is 20\n");
///
/// // "x" is never defined.
/// let err = execute("print x\n", &Options::default(), Vec::new()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// ```
pub fn execute<W: Write>(source: &str, options: &Options, out: W) -> Result<i32, Error> {
    let lexed = lex(source);
    if options.debug {
        tracing::debug!("tokens:\n{}", dump::tokens(&lexed.tokens));
    }
    if let Some(error) = lexed.error {
        tracing::warn!(%error, "scanning stopped");
        return Err(error.into());
    }

    let Parsed { program, errors } = parse_with_limit(&lexed.tokens, options.recursion_limit);
    if options.debug {
        tracing::debug!("program:\n{}", dump::program(&program));
    }
    for error in &errors {
        tracing::warn!(%error, "building failed");
    }
    if let Some(error) = errors.into_iter().next() {
        return Err(error.into());
    }

    let mut context = Context::new(&program, out).with_recursion_limit(options.recursion_limit);
    let code = context.run()
                      .inspect_err(|error| tracing::warn!(%error, "evaluation stopped"))?;

    tracing::debug!(code, "program finished");
    Ok(code)
}

/// Runs `source` with program output on stdout.
///
/// Errors are printed to stderr and turned into their kind's exit code, so
/// the result is always a process exit code.
///
/// # Examples
/// ```
/// use frosting::run;
///
/// assert_eq!(run("var x = 5\nexit 3\n", false), 3);
///
/// // Division by zero is reported with its own code.
/// assert_eq!(run("var x = 1 / 0\n", false), 8);
/// ```
#[must_use]
pub fn run(source: &str, debug: bool) -> i32 {
    run_with(source,
             &Options { debug,
                        ..Options::default() })
}

/// Like [`run`], with every option configurable.
#[must_use]
pub fn run_with(source: &str, options: &Options) -> i32 {
    match execute(source, options, std::io::stdout().lock()) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error}");
            error.kind().exit_code()
        },
    }
}
