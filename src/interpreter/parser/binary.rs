use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{Builder, ParseResult},
    },
};

/// An operator whose right-hand side is a parenthesized group that has not
/// closed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation<'src> {
    /// The already-built left operand.
    pub lhs:   Expr<'src>,
    /// The operator.
    pub op:    BinaryOperator,
    /// Line of the operator token.
    pub line:  usize,
    /// Number of open groups when the operator was read. The group that
    /// closes back to this depth is the right-hand side.
    pub depth: usize,
}

impl<'src> Builder<'_, 'src> {
    /// Handles a binary operator.
    ///
    /// The left operand is the value produced just before the operator. The
    /// right operand is either the next literal, consumed immediately, or a
    /// parenthesized group, in which case the operation is completed when
    /// that group closes. Chains therefore fold strictly left to right:
    /// `2 + 3 * 4` is `(2 + 3) * 4`.
    pub(super) fn operator(&mut self, token: Token<'src>, op: BinaryOperator) -> ParseResult<()> {
        let missing = || ParseError::MissingOperand { operator: op.symbol().to_string(),
                                                      line:     token.line, };

        let follows_value = self.previous_kind()
                                .is_some_and(|kind| kind.is_literal() || kind == TokenKind::RParen);
        let floor = self.value_floor();
        if !follows_value || self.sequence().len() <= floor {
            return Err(missing());
        }
        let lhs = self.sequence().pop().ok_or_else(missing)?;

        match self.peek() {
            Some(next) if next.kind.is_literal() => {
                self.advance();
                let operation =
                    self.within_limit(Expr::operation(lhs, op, Expr::Literal(next), token.line),
                                      token.line)?;
                self.sequence().push(operation);
                Ok(())
            },
            Some(next) if next.kind == TokenKind::LParen => {
                self.pending.push(PendingOperation { lhs,
                                                     op,
                                                     line: token.line,
                                                     depth: self.groups.len() });
                Ok(())
            },
            _ => Err(missing()),
        }
    }

    /// Handles `(`.
    pub(super) fn open_group(&mut self) {
        let start = self.sequence().len();
        self.groups.push(start);
    }

    /// Handles `)`.
    ///
    /// The group must contain exactly one value. If an operator is waiting
    /// for this group, the operation is built; otherwise the group itself
    /// becomes the value.
    pub(super) fn close_group(&mut self, token: Token<'src>) -> ParseResult<()> {
        let line = token.line;
        let Some(start) = self.groups.pop() else {
            return Err(ParseError::UnbalancedGroup { line });
        };

        match self.sequence().len().saturating_sub(start) {
            0 => return Err(ParseError::EmptyGroup { line }),
            1 => {},
            _ => return Err(ParseError::MalformedGroup { line }),
        }
        let Some(inner) = self.sequence().pop() else {
            return Err(ParseError::EmptyGroup { line });
        };
        let group = Expr::grouped(inner);

        let depth = self.groups.len();
        let value = match self.pending.pop_if(|pending| pending.depth == depth) {
            Some(PendingOperation { lhs, op, line, .. }) => Expr::operation(lhs, op, group, line),
            None => group,
        };

        let value = self.within_limit(value, line)?;
        self.sequence().push(value);
        Ok(())
    }

    /// Rejects `expr` when reducing it would recurse past the limit.
    ///
    /// Every group and operation passes through here as it is built, so no
    /// tree deeper than the limit plus one ever exists.
    fn within_limit(&self, expr: Expr<'src>, line: usize) -> ParseResult<Expr<'src>> {
        if expr.nesting() > self.recursion_limit {
            tracing::debug!(nesting = expr.nesting(),
                            limit = self.recursion_limit,
                            "expression too deep");
            return Err(ParseError::NestingTooDeep { limit: self.recursion_limit,
                                                    line });
        }
        Ok(expr)
    }
}
