/// Checked integer helpers.
///
/// Parses integer literals and exit codes and performs arithmetic that
/// reports overflow and division by zero instead of panicking or wrapping.
pub mod num;
/// Debug dumps.
///
/// Renders the token list and the expression tree as text for `--debug`.
pub mod dump;
