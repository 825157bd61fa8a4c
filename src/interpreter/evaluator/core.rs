use std::io::Write;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::function::exit::exit_code,
        lexer::{Token, TokenKind},
        value::frame::Frame,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit for nested function calls and nested operand reduction.
pub const DEFAULT_RECURSION_LIMIT: usize = 256;

/// How the evaluation of a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Every statement ran.
    Finished,
    /// `exit` stopped evaluation with the given code.
    Exit(i32),
}

/// What the cursor loop does after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Continue with the following statement.
    Next,
    /// Continue at the given index.
    Jump(usize),
    /// Stop with the given exit code.
    Exit(i32),
}

/// Stores the runtime evaluation context.
///
/// The context borrows the program being run and owns the output sink.
/// Variables are not stored here: each invocation gets its own [`Frame`].
///
/// # Example
/// ```
/// use frosting::interpreter::{evaluator::core::Context, lexer::lex, parser::parse};
///
/// let lexed = lex("var x = (2 + 3) * 4\nprint \"x is \" x\n");
/// let parsed = parse(&lexed.tokens);
///
/// let mut context = Context::new(&parsed.program, Vec::new());
/// assert_eq!(context.run().unwrap(), 0);
/// assert_eq!(context.into_output(), b"x is 20\n");
/// ```
pub struct Context<'p, 'src, W> {
    /// The statements and function table being evaluated.
    pub(crate) program:         &'p Program<'src>,
    pub(crate) out:             W,
    /// Current function-call depth.
    pub(crate) depth:           usize,
    pub(crate) recursion_limit: usize,
}

impl<'p, 'src, W: Write> Context<'p, 'src, W> {
    /// Creates a context that writes program output to `out`.
    #[must_use]
    pub const fn new(program: &'p Program<'src>, out: W) -> Self {
        Self { program,
               out,
               depth: 0,
               recursion_limit: DEFAULT_RECURSION_LIMIT }
    }

    /// Replaces the recursion limit.
    #[must_use]
    pub const fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates the top-level statements in a fresh frame.
    ///
    /// # Returns
    /// The code passed to `exit`, or `0` when the program ran to the end.
    pub fn run(&mut self) -> EvalResult<i32> {
        let program = self.program;
        let mut frame = Frame::new();

        tracing::debug!(statements = program.expressions.len(),
                        functions = program.functions.len(),
                        "evaluating program");

        match self.eval_sequence(&program.expressions, &mut frame)? {
            Flow::Finished => Ok(0),
            Flow::Exit(code) => Ok(code),
        }
    }

    /// Evaluates a sequence of statements with an explicit cursor.
    ///
    /// Keywords may move the cursor (`end` rewinds it to the top of the
    /// active loop) or stop the sequence (`exit`).
    pub fn eval_sequence(&mut self,
                         expressions: &'p [Expr<'src>],
                         frame: &mut Frame<'src>)
                         -> EvalResult<Flow> {
        let mut cursor = 0;

        while let Some(expr) = expressions.get(cursor) {
            tracing::trace!(cursor, line = expr.line(), "evaluating statement");

            match self.eval_statement(expr, cursor, frame)? {
                Step::Next => cursor += 1,
                Step::Jump(target) => cursor = target,
                Step::Exit(code) => return Ok(Flow::Exit(code)),
            }
        }

        Ok(Flow::Finished)
    }

    /// Evaluates a single statement at index `cursor` of its sequence.
    ///
    /// Groups are unwrapped first. Bare literals do nothing; bare operations
    /// are reduced for their errors and the result is dropped.
    pub fn eval_statement(&mut self,
                          expr: &'p Expr<'src>,
                          cursor: usize,
                          frame: &mut Frame<'src>)
                          -> EvalResult<Step> {
        match expr.unwrap_groups() {
            Expr::Literal(_) | Expr::Grouped(_) => Ok(Step::Next),
            operation @ Expr::Operation { .. } => {
                self.reduce(operation, frame, 0)?;
                Ok(Step::Next)
            },
            Expr::VarSet { name, value } => {
                let value = self.reduce(value, frame, 0)?;
                frame.set(name.text, value);
                Ok(Step::Next)
            },
            Expr::VarReassign { name, value } => {
                if frame.get(name.text).is_none() {
                    return Err(RuntimeError::UnknownVariable { name: name.text.to_string(),
                                                               line: name.line, });
                }
                let value = self.reduce(value, frame, 0)?;
                frame.reassign(name.text, value);
                Ok(Step::Next)
            },
            Expr::FunctionCall { keyword, arguments } => {
                self.dispatch(*keyword, arguments, cursor, frame)
            },
        }
    }

    /// Runs a keyword call.
    fn dispatch(&mut self,
                keyword: Token<'src>,
                arguments: &'p [Expr<'src>],
                cursor: usize,
                frame: &mut Frame<'src>)
                -> EvalResult<Step> {
        let line = keyword.line;

        match keyword.kind {
            TokenKind::Print => {
                self.print(arguments, line, frame)?;
                Ok(Step::Next)
            },
            TokenKind::Call => self.call(arguments, line, frame),
            TokenKind::Exit => Ok(Step::Exit(exit_code(arguments)?)),
            TokenKind::For => {
                self.start_loop(arguments, cursor, line, frame)?;
                Ok(Step::Next)
            },
            TokenKind::End => self.end_loop(line, frame),
            _ => Err(RuntimeError::Unimplemented { keyword: keyword.text.to_string(),
                                                   line }),
        }
    }
}
