use logos::Logos;

use crate::error::ParseError;

/// Represents the kind of a lexical token in the source input.
///
/// The lexer only classifies; the token text stays in the source buffer and
/// is referenced by [`Token`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `,`
    #[token(",")]
    Comma,
    /// A single `=`. Only meaningful inside `var name = value` and
    /// `name = value`; the builder rejects it anywhere else.
    #[token("=")]
    Assign,
    /// Variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// String literals. No escapes; may span lines.
    #[regex(r#""[^"]*""#, |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
    }, allow_greedy = true)]
    String,
    /// `var`
    #[token("var")]
    Var,
    /// `print`
    #[token("print")]
    Print,
    /// `read`
    #[token("read")]
    Read,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `exit`
    #[token("exit")]
    Exit,
    /// `end`
    #[token("end")]
    End,
    /// `func`
    #[token("func")]
    Func,
    /// `call`
    #[token("call")]
    Call,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks separate statements.
    #[token("\n", |lex| lex.extras.line += 1)]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for the fifteen reserved words.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self,
                 Self::Var
                 | Self::Print
                 | Self::Read
                 | Self::For
                 | Self::While
                 | Self::If
                 | Self::Else
                 | Self::Elif
                 | Self::And
                 | Self::Or
                 | Self::Not
                 | Self::Exit
                 | Self::End
                 | Self::Func
                 | Self::Call)
    }

    /// Returns `true` for tokens that are values on their own: integers,
    /// strings and identifiers.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Integer | Self::String | Self::Identifier)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token: its kind plus a view into the source it was scanned from.
///
/// Tokens never copy text. For strings, `text` excludes the quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:  TokenKind,
    /// The token text, borrowed from the source.
    pub text:  &'src str,
    /// Byte offset of `text` in the source.
    pub start: usize,
    /// Line the token starts on, counted from 1.
    pub line:  usize,
}

impl<'src> Token<'src> {
    fn new(kind: TokenKind, slice: &'src str, start: usize, line: usize) -> Self {
        if kind == TokenKind::String {
            let inner = &slice[1..slice.len() - 1];
            return Self { kind,
                          text: inner,
                          start: start + 1,
                          line };
        }
        Self { kind,
               text: slice,
               start,
               line }
    }

    /// Length of the token text in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` when the token text is empty, as in `""`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The output of a scan: every token produced, and the error that stopped
/// the scan if there was one.
#[derive(Debug)]
pub struct Lexed<'src> {
    /// Tokens in source order.
    pub tokens: Vec<Token<'src>>,
    /// Set when scanning stopped early.
    pub error:  Option<ParseError>,
}

/// Scans `source` into tokens.
///
/// Scanning stops at the first character that starts no token; the tokens
/// read up to that point are still returned alongside the error.
///
/// # Example
/// ```
/// use frosting::interpreter::lexer::{TokenKind, lex};
///
/// let lexed = lex("var x = 3\n");
/// assert!(lexed.error.is_none());
///
/// let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::NewLine]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Lexed<'_> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();
    let mut error = None;

    loop {
        let line = lexer.extras.line;
        let Some(result) = lexer.next() else {
            break;
        };

        if let Ok(kind) = result {
            tokens.push(Token::new(kind, lexer.slice(), lexer.span().start, line));
        } else {
            let slice = lexer.slice();
            error = Some(if slice.starts_with('"') {
                             ParseError::UnterminatedString { line }
                         } else {
                             ParseError::UnknownCharacter { character: slice.chars()
                                                                            .next()
                                                                            .unwrap_or('\0'),
                                                            line }
                         });
            break;
        }
    }

    Lexed { tokens, error }
}
