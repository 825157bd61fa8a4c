use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or building.
pub enum ParseError {
    /// The scanner found a character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was still open at the end of the input.
    UnterminatedString {
        /// The source line where the string starts.
        line: usize,
    },
    /// A token appeared where it cannot be used.
    UnexpectedToken {
        /// The token text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A single `=` outside of `var name = value` or `name = value`.
    BareAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The name after `var` is not an identifier.
    InvalidVariableName {
        /// The token found in place of the name.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binding did not end up with exactly one value.
    InvalidBinding {
        /// The variable being bound.
        name:  String,
        /// How many values the line produced.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator is missing its left or right operand.
    MissingOperand {
        /// The operator symbol.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A `)` without a matching `(`.
    UnbalancedGroup {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` still open at the end of its line.
    UnclosedGroup {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `()` with nothing inside.
    EmptyGroup {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A group holding more than one expression.
    MalformedGroup {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Groups and operations nest deeper than the recursion limit allows.
    NestingTooDeep {
        /// The recursion limit in effect.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A keyword call collected more arguments than allowed.
    TooManyArguments {
        /// The keyword that opened the call.
        keyword: String,
        /// The maximum number of arguments.
        max:     usize,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The `func` header was not `func name param...`.
    InvalidFunctionDefinition {
        /// Details about what was wrong.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `func` inside the body of another function.
    NestedFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function name was defined twice.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line of the second definition.
        line: usize,
    },
    /// A function body was never closed with `end`.
    UnclosedFunction {
        /// The name of the function.
        name: String,
        /// The source line of the `func` header.
        line: usize,
    },
}

impl ParseError {
    /// Returns the error kind used for reporting and exit codes.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCharacter { .. } => ErrorKind::UnknownCharacter,
            Self::NestingTooDeep { .. } => ErrorKind::RecursionLimitExceeded,
            _ => ErrorKind::MalformedSyntax,
        }
    }

    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::BareAssignment { line }
            | Self::InvalidVariableName { line, .. }
            | Self::InvalidBinding { line, .. }
            | Self::MissingOperand { line, .. }
            | Self::UnbalancedGroup { line }
            | Self::UnclosedGroup { line }
            | Self::EmptyGroup { line }
            | Self::MalformedGroup { line }
            | Self::NestingTooDeep { line, .. }
            | Self::TooManyArguments { line, .. }
            | Self::InvalidFunctionDefinition { line, .. }
            | Self::NestedFunctionDefinition { line }
            | Self::FunctionAlreadyDefined { line, .. }
            | Self::UnclosedFunction { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, line } => {
                write!(f, "Error on line {line}: Unknown character found: '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: String literal is never closed.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::BareAssignment { line } => write!(f,
                                                    "Error on line {line}: A single '=' is only allowed in 'var name = value' or 'name = value'."),
            Self::InvalidVariableName { token, line } => write!(f,
                                                                "Error on line {line}: Expected a variable name after 'var', found '{token}'."),
            Self::InvalidBinding { name, found, line } => write!(f,
                                                                 "Error on line {line}: Variable '{name}' needs exactly one value, found {found}."),
            Self::MissingOperand { operator, line } => {
                write!(f, "Error on line {line}: Operator '{operator}' is missing an operand.")
            },
            Self::UnbalancedGroup { line } => {
                write!(f, "Error on line {line}: Found ')' without a matching '('.")
            },
            Self::UnclosedGroup { line } => write!(f,
                                                   "Error on line {line}: Expected closing parenthesis ')' but none found."),
            Self::EmptyGroup { line } => {
                write!(f, "Error on line {line}: Group expression requires something inside of it.")
            },
            Self::MalformedGroup { line } => {
                write!(f, "Error on line {line}: Group holds more than one expression.")
            },
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Expression nests deeper than the limit of {limit}."),
            Self::TooManyArguments { keyword, max, line } => write!(f,
                                                                    "Error on line {line}: '{keyword}' takes at most {max} arguments."),
            Self::InvalidFunctionDefinition { details, line } => write!(f,
                                                                        "Error on line {line}: Invalid function definition: {details}. Example: func add a b"),
            Self::NestedFunctionDefinition { line } => {
                write!(f, "Error on line {line}: Functions cannot be defined inside functions.")
            },
            Self::FunctionAlreadyDefined { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is already defined.")
            },
            Self::UnclosedFunction { name, line } => write!(f,
                                                            "Error on line {line}: Function '{name}' is never closed with 'end'."),
        }
    }
}

impl std::error::Error for ParseError {}
