use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow, Step},
            function::exit::exit_code,
        },
        lexer::TokenKind,
        value::frame::Frame,
    },
};

impl<'p, 'src, W: Write> Context<'p, 'src, W> {
    /// Evaluates `call name args...`.
    ///
    /// When `name` is the keyword `print` or `exit`, the call dispatches to
    /// that built-in with the remaining arguments. Otherwise `name` must be a
    /// function defined with `func` and receive exactly as many arguments as
    /// it declares parameters.
    ///
    /// Arguments are resolved in the caller's frame and bound to the
    /// parameters of a brand-new frame, so the body sees nothing of the
    /// caller except what was passed. An `exit` inside the body stops the
    /// caller too.
    ///
    /// # Parameters
    /// - `arguments`: The function name followed by its arguments.
    /// - `line`: Line of the `call` keyword.
    /// - `frame`: The caller's variables.
    pub fn call(&mut self,
                arguments: &'p [Expr<'src>],
                line: usize,
                frame: &mut Frame<'src>)
                -> EvalResult<Step> {
        let Some((Expr::Literal(name), rest)) = arguments.split_first() else {
            return Err(RuntimeError::InvalidArguments { keyword: "call".to_string(),
                                                        details: "expected a function name".to_string(),
                                                        line });
        };

        match name.kind {
            TokenKind::Print => {
                self.print(rest, line, frame)?;
                return Ok(Step::Next);
            },
            TokenKind::Exit => return Ok(Step::Exit(exit_code(rest)?)),
            TokenKind::Identifier => {},
            _ => {
                return Err(RuntimeError::InvalidArguments { keyword: "call".to_string(),
                                                            details: format!("'{}' cannot be called",
                                                                             name.text),
                                                            line });
            },
        }

        let program = self.program;
        let function =
            program.function(name.text)
                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.text.to_string(),
                                                                  line })?;

        if rest.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.text.to_string(),
                                                             expected: function.parameters.len(),
                                                             found: rest.len(),
                                                             line });
        }

        let mut callee = Frame::new();
        for (parameter, argument) in function.parameters.iter().zip(rest) {
            callee.set(parameter.text, self.reduce(argument, frame, 0)?);
        }

        if self.depth >= self.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded { limit: self.recursion_limit,
                                                              line });
        }

        tracing::debug!(name = name.text, depth = self.depth + 1, "calling function");
        self.depth += 1;
        let flow = self.eval_sequence(&function.body, &mut callee);
        self.depth -= 1;

        match flow? {
            Flow::Finished => Ok(Step::Next),
            Flow::Exit(code) => {
                tracing::debug!(name = name.text, code, "exit inside function");
                Ok(Step::Exit(code))
            },
        }
    }
}
