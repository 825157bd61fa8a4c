use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Step},
            utils::expect_name,
        },
        value::{
            core::Value,
            frame::{Frame, LoopMarker},
        },
    },
};

impl<'src, W: Write> Context<'_, 'src, W> {
    /// Evaluates `for variable bound` at index `cursor`.
    ///
    /// Records the loop marker; the statements up to the matching `end` form
    /// the body. The control variable starts at `0` when it does not exist
    /// yet and must be a number otherwise. The body runs while the control
    /// variable, checked at each `end`, is below `bound`.
    ///
    /// Only one loop can be active per frame. Loops nest by moving the inner
    /// loop into a function.
    ///
    /// # Parameters
    /// - `arguments`: The control variable and the bound.
    /// - `cursor`: Index of the `for` statement in its sequence.
    /// - `line`: Line of the `for` keyword.
    /// - `frame`: The frame the loop runs in.
    pub fn start_loop(&self,
                      arguments: &[Expr<'src>],
                      cursor: usize,
                      line: usize,
                      frame: &mut Frame<'src>)
                      -> EvalResult<()> {
        if arguments.len() != 2 {
            return Err(RuntimeError::InvalidArguments { keyword: "for".to_string(),
                                                        details: format!("expected a variable and a bound, found {} arguments",
                                                                         arguments.len()),
                                                        line });
        }
        let variable = expect_name("for", arguments.first(), line)?;

        if frame.loop_marker.is_some() {
            return Err(RuntimeError::Unimplemented { keyword: "nested for loops".to_string(),
                                                     line });
        }

        let bound = self.reduce(&arguments[1], frame, 0)?
                        .as_number("loop bound", line)?;

        match frame.get(variable.text) {
            None => frame.set(variable.text, Value::Number(0)),
            Some(value) => {
                value.as_number("loop variable", line)?;
            },
        }

        tracing::debug!(variable = variable.text, bound, cursor, "entering loop");
        frame.loop_marker = Some(LoopMarker { start: cursor,
                                              variable: variable.text,
                                              bound,
                                              line });
        Ok(())
    }

    /// Evaluates `end`.
    ///
    /// While the control variable is below the bound, it is incremented and
    /// evaluation continues right after the `for`. Otherwise the loop marker
    /// is cleared and evaluation falls through.
    ///
    /// # Returns
    /// `Step::Jump` to rewind, `Step::Next` when the loop is over.
    pub fn end_loop(&self, line: usize, frame: &mut Frame<'src>) -> EvalResult<Step> {
        let Some(marker) = frame.loop_marker else {
            return Err(RuntimeError::UnmatchedEnd { line });
        };

        let current =
            frame.get(marker.variable)
                 .ok_or_else(|| RuntimeError::UnknownVariable { name: marker.variable.to_string(),
                                                                line: marker.line, })?
                 .as_number("loop variable", line)?;

        if current < marker.bound {
            let next = current.checked_add(1)
                              .ok_or(RuntimeError::Overflow { line })?;
            frame.set(marker.variable, Value::Number(next));
            tracing::trace!(variable = marker.variable, value = next, "rewinding loop");
            return Ok(Step::Jump(marker.start + 1));
        }

        tracing::debug!(variable = marker.variable, "leaving loop");
        frame.loop_marker = None;
        Ok(Step::Next)
    }
}
