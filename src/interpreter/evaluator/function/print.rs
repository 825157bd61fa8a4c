use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::TokenKind,
        value::frame::Frame,
    },
};

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Prints the arguments, concatenated without separators, followed by a
    /// newline.
    ///
    /// Integer, string and keyword literals print their source text verbatim.
    /// Identifiers print the variable's current value; groups and operations
    /// print their reduced value.
    ///
    /// The line is assembled before anything is written, so a failing
    /// argument produces no output at all.
    ///
    /// # Parameters
    /// - `arguments`: The values to print.
    /// - `line`: Line of the `print` keyword.
    /// - `frame`: Variables visible to the arguments.
    pub fn print(&mut self,
                 arguments: &[Expr<'src>],
                 line: usize,
                 frame: &Frame<'src>)
                 -> EvalResult<()> {
        let mut text = String::new();

        for argument in arguments {
            match argument {
                Expr::Literal(token) if token.kind != TokenKind::Identifier => {
                    text.push_str(token.text);
                },
                other => text.push_str(&self.reduce(other, frame, 0)?.to_string()),
            }
        }

        writeln!(self.out, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                         line })
    }
}
