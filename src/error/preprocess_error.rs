use std::path::PathBuf;

#[derive(Debug)]
/// Represents all errors that can occur while expanding `!path` directives.
pub enum PreprocessError {
    /// The included file could not be read.
    Unreadable {
        /// The path named by the directive.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
        /// The line of the directive in the including source.
        line:   usize,
    },
    /// Includes nested deeper than allowed, usually a file including itself.
    IncludeTooDeep {
        /// The path that would have been expanded next.
        path:  PathBuf,
        /// The maximum nesting depth.
        limit: usize,
    },
}

impl std::fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { path, source, line } => write!(f,
                                                              "Error on line {line}: Failed to include '{}': {source}.",
                                                              path.display()),
            Self::IncludeTooDeep { path, limit } => write!(f,
                                                           "Error: Including '{}' goes deeper than {limit} levels.",
                                                           path.display()),
        }
    }
}

impl std::error::Error for PreprocessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::IncludeTooDeep { .. } => None,
        }
    }
}
