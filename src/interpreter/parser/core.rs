use crate::{
    ast::{BinaryOperator, Expr, Function, Program},
    error::ParseError,
    interpreter::{
        evaluator::core::DEFAULT_RECURSION_LIMIT,
        lexer::{Token, TokenKind},
        parser::{binary::PendingOperation, context::ParseContext},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of arguments a keyword call may collect.
pub const MAX_CALL_ARGUMENTS: usize = 16;

/// The output of the builder.
///
/// `program` is complete only when `errors` is empty; otherwise it holds
/// whatever could be built and should only be used for diagnostics.
#[derive(Debug)]
pub struct Parsed<'src> {
    /// Top-level statements and function definitions.
    pub program: Program<'src>,
    /// Every error recorded, in source order.
    pub errors:  Vec<ParseError>,
}

impl Parsed<'_> {
    /// Returns `true` when building finished without errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds a program from a token sequence in a single left-to-right pass.
///
/// Errors do not stop the pass: the offending line is skipped and building
/// resumes on the next one so every problem in the file gets reported.
///
/// # Example
/// ```
/// use frosting::{
///     ast::Expr,
///     interpreter::{lexer::lex, parser::parse},
/// };
///
/// let lexed = lex("var x = (2 + 3) * 4\nprint x\n");
/// let parsed = parse(&lexed.tokens);
///
/// assert!(parsed.is_ok());
/// assert_eq!(parsed.program.expressions.len(), 2);
/// assert!(matches!(parsed.program.expressions[0], Expr::VarSet { .. }));
/// ```
#[must_use]
pub fn parse<'src>(tokens: &[Token<'src>]) -> Parsed<'src> {
    parse_with_limit(tokens, DEFAULT_RECURSION_LIMIT)
}

/// Like [`parse`], rejecting groups and operations that nest deeper than
/// `recursion_limit` with `NestingTooDeep`.
///
/// # Example
/// ```
/// use frosting::{
///     error::{ErrorKind, ParseError},
///     interpreter::{lexer::lex, parser::parse_with_limit},
/// };
///
/// let lexed = lex("var x = 1 + 2 + 3\n");
/// assert!(parse_with_limit(&lexed.tokens, 2).is_ok());
///
/// let parsed = parse_with_limit(&lexed.tokens, 1);
/// assert_eq!(parsed.errors, [ParseError::NestingTooDeep { limit: 1, line: 1 }]);
/// assert_eq!(parsed.errors[0].kind(), ErrorKind::RecursionLimitExceeded);
/// ```
#[must_use]
pub fn parse_with_limit<'src>(tokens: &[Token<'src>], recursion_limit: usize) -> Parsed<'src> {
    let mut builder = Builder::new(tokens, recursion_limit);

    while let Some(token) = builder.advance() {
        if let Err(error) = builder.handle(token) {
            builder.recover(error);
        }
    }

    builder.finish()
}

/// Builder state for one pass over the tokens.
pub(super) struct Builder<'t, 'src> {
    tokens:                     &'t [Token<'src>],
    pos:                        usize,
    pub(super) program:         Program<'src>,
    /// The function whose body is being built, if any.
    pub(super) function:        Option<Function<'src>>,
    pub(super) contexts:        Vec<ParseContext<'src>>,
    /// Sequence length at each open `(`.
    pub(super) groups:          Vec<usize>,
    pub(super) pending:         Vec<PendingOperation<'src>>,
    /// `if`, `for` and `while` blocks still waiting for their `end`.
    pub(super) open_blocks:     usize,
    /// Sequence length when the current line started.
    pub(super) line_start:      usize,
    /// Deepest nesting an expression may reach.
    pub(super) recursion_limit: usize,
    errors:                     Vec<ParseError>,
}

impl<'t, 'src> Builder<'t, 'src> {
    fn new(tokens: &'t [Token<'src>], recursion_limit: usize) -> Self {
        Self { tokens,
               pos: 0,
               program: Program::default(),
               function: None,
               contexts: vec![ParseContext::Toplevel],
               groups: Vec::new(),
               pending: Vec::new(),
               open_blocks: 0,
               line_start: 0,
               recursion_limit,
               errors: Vec::new() }
    }

    pub(super) fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    pub(super) fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).copied()
    }

    /// Kind of the token before the one most recently advanced over.
    pub(super) fn previous_kind(&self) -> Option<TokenKind> {
        self.pos.checked_sub(2).map(|i| self.tokens[i].kind)
    }

    pub(super) fn at_line_start(&self) -> bool {
        matches!(self.previous_kind(), None | Some(TokenKind::NewLine))
    }

    /// The sequence currently receiving expressions.
    pub(super) fn sequence(&mut self) -> &mut Vec<Expr<'src>> {
        match &mut self.function {
            Some(function) => &mut function.body,
            None => &mut self.program.expressions,
        }
    }

    fn handle(&mut self, token: Token<'src>) -> ParseResult<()> {
        match token.kind {
            TokenKind::NewLine => self.finish_line(token.line),
            TokenKind::Integer | TokenKind::String | TokenKind::Identifier => self.literal(token),
            TokenKind::LParen => {
                self.open_group();
                Ok(())
            },
            TokenKind::RParen => self.close_group(token),
            TokenKind::Assign => Err(ParseError::BareAssignment { line: token.line }),
            TokenKind::Comma => self.separator(token),
            kind => match BinaryOperator::from_token(kind) {
                Some(op) => self.operator(token, op),
                None => self.keyword(token),
            },
        }
    }

    /// Records `error` and skips the rest of the line it occurred on.
    fn recover(&mut self, error: ParseError) {
        tracing::debug!(%error, "skipping rest of line");
        self.errors.push(error);

        let mut last = self.pos.checked_sub(1).map(|i| self.tokens[i].kind);
        while last != Some(TokenKind::NewLine) {
            match self.advance() {
                Some(token) => last = Some(token.kind),
                None => break,
            }
        }

        let line_start = self.line_start;
        self.sequence().truncate(line_start);
        self.reset_line();
    }

    fn finish(mut self) -> Parsed<'src> {
        let line = self.tokens.last().map_or(1, |t| t.line);
        if let Err(error) = self.finish_line(line) {
            self.errors.push(error);
        }

        if let Some(function) = self.function.take() {
            self.errors.push(ParseError::UnclosedFunction { name: function.name.text.to_string(),
                                                            line: function.name.line, });
        }

        Parsed { program: self.program,
                 errors:  self.errors, }
    }
}

/// Describes a token for error messages.
pub(super) fn describe(token: &Token<'_>) -> String {
    match token.kind {
        TokenKind::NewLine => "end of line".to_string(),
        TokenKind::String => format!("\"{}\"", token.text),
        _ => token.text.to_string(),
    }
}
