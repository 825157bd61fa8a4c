use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments passed.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A keyword call received arguments of the wrong shape or count.
    InvalidArguments {
        /// The keyword being evaluated.
        keyword: String,
        /// Details about what was expected.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `end` with no active loop.
    UnmatchedEnd {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The keyword is recognized but has no runtime behavior.
    Unimplemented {
        /// The keyword or construct.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls or nested expressions went past the configured limit.
    RecursionLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Writing program output failed.
    Output {
        /// Details from the underlying writer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the error kind used for reporting and exit codes.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnknownFunction { .. } => ErrorKind::NotFound,
            Self::ArgumentCountMismatch { .. } => ErrorKind::WrongArity,
            Self::InvalidArguments { .. } => ErrorKind::MalformedSyntax,
            Self::TypeError { .. } => ErrorKind::TypeMismatch,
            Self::UnmatchedEnd { .. } => ErrorKind::UnmatchedEnd,
            Self::Unimplemented { .. } => ErrorKind::Unimplemented,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
            Self::Overflow { .. } | Self::LiteralTooLarge { .. } => ErrorKind::Overflow,
            Self::Output { .. } => ErrorKind::Output,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' takes {expected} arguments but {found} were given."),
            Self::InvalidArguments { keyword,
                                     details,
                                     line, } => {
                write!(f, "Error on line {line}: Invalid arguments to '{keyword}': {details}.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::UnmatchedEnd { line } => {
                write!(f, "Error on line {line}: 'end' does not close a loop.")
            },
            Self::Unimplemented { keyword, line } => {
                write!(f, "Error on line {line}: '{keyword}' is not implemented.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::RecursionLimitExceeded { limit, line } => write!(f,
                                                                   "Error on line {line}: Recursion went deeper than {limit} levels."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
