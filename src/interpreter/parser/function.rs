use crate::{
    ast::Function,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            context::ParseContext,
            core::{Builder, ParseResult, describe},
        },
    },
};

impl<'src> Builder<'_, 'src> {
    /// Handles `func name p1 p2 ...`.
    ///
    /// The header must start its line and may only contain identifiers
    /// (optionally comma separated). The newline ending the header is left
    /// for the main loop.
    pub(super) fn open_function(&mut self, func: Token<'src>) -> ParseResult<()> {
        if self.function.is_some() {
            return Err(ParseError::NestedFunctionDefinition { line: func.line });
        }
        if !self.at_line_start() {
            return Err(ParseError::UnexpectedToken { token: describe(&func),
                                                     line:  func.line, });
        }

        let name = match self.peek() {
            Some(name) if name.kind == TokenKind::Identifier => name,
            other => {
                let found = other.map_or_else(|| "end of input".to_string(), |t| describe(&t));
                return Err(ParseError::InvalidFunctionDefinition { details: format!("expected a function name, found {found}"),
                                                                   line:    func.line, });
            },
        };
        self.advance();

        let mut parameters: Vec<Token<'src>> = Vec::new();
        while let Some(next) = self.peek() {
            match next.kind {
                TokenKind::NewLine => break,
                TokenKind::Comma => {},
                TokenKind::Identifier => {
                    if parameters.iter().any(|p| p.text == next.text) {
                        return Err(ParseError::InvalidFunctionDefinition { details: format!("duplicate parameter '{}'", next.text),
                                                                           line:    next.line, });
                    }
                    parameters.push(next);
                },
                _ => {
                    return Err(ParseError::InvalidFunctionDefinition { details: format!("expected a parameter name, found {}",
                                                                                        describe(&next)),
                                                                       line:    next.line, });
                },
            }
            self.advance();
        }

        tracing::trace!(name = name.text, parameters = parameters.len(), "opening function");
        self.function = Some(Function { name,
                                        parameters,
                                        body: Vec::new() });
        self.contexts.push(ParseContext::FunctionBody);
        self.open_blocks = 0;
        self.line_start = 0;
        Ok(())
    }

    /// Handles the `end` that closes the function being defined.
    pub(super) fn close_function(&mut self, end: Token<'src>) -> ParseResult<()> {
        if matches!(self.contexts.last(), Some(ParseContext::FunctionBody)) {
            self.contexts.pop();
        }
        let Some(function) = self.function.take() else {
            return Err(ParseError::UnexpectedToken { token: describe(&end),
                                                     line:  end.line, });
        };
        self.line_start = self.sequence().len();

        let name = function.name;
        tracing::debug!(name = name.text, statements = function.body.len(), "defined function");
        if !self.program.define(function) {
            return Err(ParseError::FunctionAlreadyDefined { name: name.text.to_string(),
                                                            line: name.line, });
        }
        Ok(())
    }
}
