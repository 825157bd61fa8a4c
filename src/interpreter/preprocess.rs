use std::{borrow::Cow, fs, path::PathBuf};

use crate::error::PreprocessError;

/// Maximum nesting of include directives.
pub const MAX_INCLUDE_DEPTH: usize = 16;

/// Expands `!path` include directives.
///
/// A line starting with `!` is replaced by the contents of the file named by
/// the rest of the line, resolved against the working directory. Included
/// files are expanded recursively and always end with a newline in the
/// output.
///
/// Source without directives is returned unchanged and borrowed.
///
/// # Errors
/// - `Unreadable` if an included file cannot be read.
/// - `IncludeTooDeep` if includes nest deeper than [`MAX_INCLUDE_DEPTH`].
///
/// # Example
/// ```
/// use std::borrow::Cow;
///
/// use frosting::interpreter::preprocess::preprocess;
///
/// let source = "var x = 1\nprint x\n";
/// assert!(matches!(preprocess(source).unwrap(), Cow::Borrowed(s) if s == source));
/// ```
pub fn preprocess(source: &str) -> Result<Cow<'_, str>, PreprocessError> {
    if !source.lines().any(|line| line.starts_with('!')) {
        return Ok(Cow::Borrowed(source));
    }

    let mut out = String::with_capacity(source.len());
    expand(source, 0, &mut out)?;
    Ok(Cow::Owned(out))
}

fn expand(source: &str, depth: usize, out: &mut String) -> Result<(), PreprocessError> {
    for (index, line) in source.split_inclusive('\n').enumerate() {
        let Some(target) = line.strip_prefix('!') else {
            out.push_str(line);
            continue;
        };

        let path = PathBuf::from(target.trim_end_matches(['\n', '\r']));
        if depth >= MAX_INCLUDE_DEPTH {
            return Err(PreprocessError::IncludeTooDeep { path,
                                                         limit: MAX_INCLUDE_DEPTH });
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => {
                return Err(PreprocessError::Unreadable { path,
                                                         source,
                                                         line: index + 1 });
            },
        };

        tracing::debug!(path = %path.display(), depth, "including file");
        expand(&contents, depth + 1, out)?;
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    Ok(())
}
