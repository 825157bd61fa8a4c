use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The active `for` loop of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopMarker<'src> {
    /// Index of the `for` statement in the sequence being evaluated.
    pub start:    usize,
    /// The control variable.
    pub variable: &'src str,
    /// The loop repeats while the control variable is below this bound.
    pub bound:    i64,
    /// Line of the `for` statement.
    pub line:     usize,
}

/// The variable table of one invocation: the top-level run or a single
/// function call.
///
/// Names are unique. Setting an existing name overwrites its value in place.
#[derive(Debug, Default)]
pub struct Frame<'src> {
    vars:            HashMap<&'src str, Value<'src>>,
    /// The loop currently running in this frame, if any.
    pub loop_marker: Option<LoopMarker<'src>>,
}

impl<'src> Frame<'src> {
    /// Creates an empty frame with no active loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value<'src>> {
        self.vars.get(name).copied()
    }

    /// Creates the variable or overwrites it.
    pub fn set(&mut self, name: &'src str, value: Value<'src>) {
        self.vars.insert(name, value);
    }

    /// Overwrites an existing variable. Returns `false` if there is none.
    ///
    /// # Example
    /// ```
    /// use frosting::interpreter::value::{core::Value, frame::Frame};
    ///
    /// let mut frame = Frame::new();
    /// assert!(!frame.reassign("x", Value::Number(1)));
    ///
    /// frame.set("x", Value::Number(1));
    /// assert!(frame.reassign("x", Value::Number(2)));
    /// assert_eq!(frame.get("x"), Some(Value::Number(2)));
    /// ```
    pub fn reassign(&mut self, name: &str, value: Value<'src>) -> bool {
        match self.vars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }
}
