use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Builder, MAX_CALL_ARGUMENTS, ParseResult, describe},
    },
};

/// Which of the two binding forms opened a [`ParseContext::Binding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `var name = value`
    Set,
    /// `name = value`
    Reassign,
}

/// One level of the builder's context stack.
///
/// The stack always starts with `Toplevel`. At most one `FunctionBody` and
/// one line-level context (`CallArgs` or `Binding`) are open at a time; the
/// line-level context closes at the end of its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseContext<'src> {
    /// Expressions go to the program's top-level sequence.
    Toplevel,
    /// Expressions go to the body of the function being defined.
    FunctionBody,
    /// Values produced from `start` on become the arguments of `keyword`.
    CallArgs {
        /// The keyword that opened the call.
        keyword: Token<'src>,
        /// Sequence length when the call opened.
        start:   usize,
    },
    /// The single value produced from `start` on is bound to `name`.
    Binding {
        /// The variable name.
        name:  Token<'src>,
        /// `var` or plain reassignment.
        kind:  BindingKind,
        /// Sequence length when the binding opened.
        start: usize,
    },
}

impl<'src> Builder<'_, 'src> {
    /// Handles an integer, string or identifier token.
    ///
    /// An identifier at the start of a line followed by `=` opens a
    /// reassignment; every other literal is appended as a value.
    pub(super) fn literal(&mut self, token: Token<'src>) -> ParseResult<()> {
        if token.kind == TokenKind::Identifier
           && self.at_line_start()
           && self.peek().is_some_and(|next| next.kind == TokenKind::Assign)
        {
            self.advance();
            let start = self.sequence().len();
            self.contexts.push(ParseContext::Binding { name: token,
                                                       kind: BindingKind::Reassign,
                                                       start });
            return Ok(());
        }

        self.sequence().push(Expr::Literal(token));
        Ok(())
    }

    /// Handles a reserved word.
    ///
    /// Inside an argument list a keyword is just another argument. Otherwise
    /// `var` opens a binding, `func` and a function-closing `end` manage
    /// definitions, and every other keyword opens a call that collects the
    /// rest of the line as its arguments.
    pub(super) fn keyword(&mut self, token: Token<'src>) -> ParseResult<()> {
        if !token.kind.is_keyword() {
            return Err(ParseError::UnexpectedToken { token: describe(&token),
                                                     line:  token.line, });
        }

        match self.contexts.last() {
            Some(ParseContext::CallArgs { .. }) => {
                self.sequence().push(Expr::Literal(token));
                return Ok(());
            },
            Some(ParseContext::Binding { .. }) => {
                return Err(ParseError::UnexpectedToken { token: describe(&token),
                                                         line:  token.line, });
            },
            _ => {},
        }

        if !self.groups.is_empty() {
            return Err(ParseError::UnexpectedToken { token: describe(&token),
                                                     line:  token.line, });
        }

        match token.kind {
            TokenKind::Var => self.open_binding(token),
            TokenKind::Func => self.open_function(token),
            TokenKind::End if self.function.is_some() && self.open_blocks == 0 => {
                self.close_function(token)
            },
            kind => {
                match kind {
                    TokenKind::End => self.open_blocks = self.open_blocks.saturating_sub(1),
                    TokenKind::If | TokenKind::For | TokenKind::While => self.open_blocks += 1,
                    _ => {},
                }
                let start = self.sequence().len();
                self.contexts.push(ParseContext::CallArgs { keyword: token,
                                                            start });
                Ok(())
            },
        }
    }

    /// Commas only separate call arguments.
    pub(super) fn separator(&self, token: Token<'src>) -> ParseResult<()> {
        if matches!(self.contexts.last(), Some(ParseContext::CallArgs { .. })) {
            return Ok(());
        }
        Err(ParseError::UnexpectedToken { token: describe(&token),
                                          line:  token.line, })
    }

    /// `var name [=] value`
    fn open_binding(&mut self, var: Token<'src>) -> ParseResult<()> {
        let name = match self.peek() {
            Some(name) if name.kind == TokenKind::Identifier => name,
            Some(other) => {
                return Err(ParseError::InvalidVariableName { token: describe(&other),
                                                             line:  other.line, });
            },
            None => {
                return Err(ParseError::InvalidVariableName { token: "end of input".to_string(),
                                                             line:  var.line, });
            },
        };
        self.advance();

        if self.peek().is_some_and(|next| next.kind == TokenKind::Assign) {
            self.advance();
        }

        let start = self.sequence().len();
        self.contexts.push(ParseContext::Binding { name,
                                                   kind: BindingKind::Set,
                                                   start });
        Ok(())
    }

    /// Lowest sequence index an operator may pop its left operand from.
    pub(super) fn value_floor(&self) -> usize {
        let context_start = match self.contexts.last() {
            Some(ParseContext::CallArgs { start, .. } | ParseContext::Binding { start, .. }) => {
                *start
            },
            _ => 0,
        };

        self.groups
            .last()
            .copied()
            .unwrap_or(0)
            .max(context_start)
            .max(self.line_start)
    }

    /// Closes the line-level context, if any, and resets per-line state.
    ///
    /// On error the state is left for `recover` to discard.
    pub(super) fn finish_line(&mut self, line: usize) -> ParseResult<()> {
        self.close_line(line)?;
        self.reset_line();
        Ok(())
    }

    pub(super) fn reset_line(&mut self) {
        self.groups.clear();
        self.pending.clear();
        while matches!(self.contexts.last(),
                       Some(ParseContext::CallArgs { .. } | ParseContext::Binding { .. }))
        {
            self.contexts.pop();
        }
        self.line_start = self.sequence().len();
    }

    fn close_line(&mut self, line: usize) -> ParseResult<()> {
        if !self.groups.is_empty() {
            return Err(ParseError::UnclosedGroup { line });
        }
        if let Some(pending) = self.pending.last() {
            return Err(ParseError::MissingOperand { operator: pending.op.symbol().to_string(),
                                                    line:     pending.line, });
        }

        match self.contexts.pop() {
            Some(ParseContext::CallArgs { keyword, start }) => self.close_call(keyword, start),
            Some(ParseContext::Binding { name, kind, start }) => {
                self.close_binding(name, kind, start)
            },
            Some(other) => {
                self.contexts.push(other);
                Ok(())
            },
            None => Ok(()),
        }
    }

    fn close_call(&mut self, keyword: Token<'src>, start: usize) -> ParseResult<()> {
        let sequence = self.sequence();
        let arguments: Vec<_> = sequence.drain(start.min(sequence.len())..).collect();

        if arguments.len() > MAX_CALL_ARGUMENTS {
            return Err(ParseError::TooManyArguments { keyword: keyword.text.to_string(),
                                                      max:     MAX_CALL_ARGUMENTS,
                                                      line:    keyword.line, });
        }

        sequence.push(Expr::FunctionCall { keyword, arguments });
        Ok(())
    }

    fn close_binding(&mut self,
                     name: Token<'src>,
                     kind: BindingKind,
                     start: usize)
                     -> ParseResult<()> {
        let sequence = self.sequence();
        let found = sequence.len().saturating_sub(start);
        let invalid = || ParseError::InvalidBinding { name: name.text.to_string(),
                                                      found,
                                                      line: name.line };

        if found != 1 {
            return Err(invalid());
        }
        let value = Box::new(sequence.pop().ok_or_else(invalid)?);

        sequence.push(match kind {
                          BindingKind::Set => Expr::VarSet { name, value },
                          BindingKind::Reassign => Expr::VarReassign { name, value },
                      });
        Ok(())
    }
}
