/// Scanning and building errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens and tokens into expressions. Parse errors include unknown
/// characters, unbalanced groups, malformed bindings and malformed function
/// definitions, all detected before evaluation starts.
pub mod parse_error;
/// Include directive errors.
///
/// Raised while splicing `!path` directives into the source before scanning.
pub mod preprocess_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, arity and type mismatches, unmatched `end`, unimplemented keywords,
/// division by zero and runaway recursion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use preprocess_error::PreprocessError;
pub use runtime_error::RuntimeError;

/// The coarse classification every error falls into.
///
/// Each kind maps to a stable process exit code so callers of the binary can
/// tell failures apart without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scanner met a byte that starts no token.
    UnknownCharacter,
    /// Wrong argument count or shape, unbalanced grouping, invalid names or a
    /// stray `=`.
    MalformedSyntax,
    /// A variable or function name could not be resolved.
    NotFound,
    /// A function was called with the wrong number of arguments.
    WrongArity,
    /// Operands of different types, arithmetic on strings or a non-numeric
    /// loop bound.
    TypeMismatch,
    /// An `end` that closes neither a loop nor a function body.
    UnmatchedEnd,
    /// A keyword that is recognized but has no runtime behavior.
    Unimplemented,
    /// Division by zero.
    DivisionByZero,
    /// Function calls or nested expressions went deeper than allowed.
    RecursionLimitExceeded,
    /// An integer literal or computation left the 64-bit range.
    Overflow,
    /// Program output could not be written.
    Output,
}

impl ErrorKind {
    /// Returns the process exit code reported for this kind of failure.
    ///
    /// # Example
    /// ```
    /// use frosting::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::UnknownCharacter.exit_code(), 1);
    /// assert_eq!(ErrorKind::DivisionByZero.exit_code(), 8);
    /// ```
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::UnknownCharacter => 1,
            Self::MalformedSyntax => 2,
            Self::WrongArity => 3,
            Self::NotFound => 4,
            Self::TypeMismatch => 5,
            Self::UnmatchedEnd => 6,
            Self::Unimplemented => 7,
            Self::DivisionByZero => 8,
            Self::RecursionLimitExceeded => 9,
            Self::Overflow => 10,
            Self::Output => 11,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnknownCharacter => "unknown character",
            Self::MalformedSyntax => "malformed syntax",
            Self::NotFound => "not found",
            Self::WrongArity => "wrong arity",
            Self::TypeMismatch => "type mismatch",
            Self::UnmatchedEnd => "unmatched end",
            Self::Unimplemented => "unimplemented",
            Self::DivisionByZero => "division by zero",
            Self::RecursionLimitExceeded => "recursion limit exceeded",
            Self::Overflow => "overflow",
            Self::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
/// Any error the pipeline can stop with.
pub enum Error {
    /// The scanner or the builder rejected the source.
    Parse(ParseError),
    /// Evaluation aborted.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the kind of the wrapped error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
