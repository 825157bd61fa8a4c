/// The evaluator module executes expression trees.
///
/// The evaluator walks an expression sequence with an explicit cursor,
/// reduces operations to values, manages one variable frame per invocation,
/// and runs the keyword built-ins. It is the last phase of the pipeline.
///
/// # Responsibilities
/// - Evaluates statements, bindings and keyword calls.
/// - Calls user-defined functions with a fresh frame per call.
/// - Runs `for` loops by rewinding the cursor.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens that borrow their
/// text from it: literals, operators, grouping, keywords and line breaks.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, text and line.
/// - Classifies reserved words.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The builder consumes the tokens once, left to right, and produces the
/// top-level statements and the function table.
///
/// # Responsibilities
/// - Turns lines into bindings, keyword calls and operations.
/// - Separates function bodies from top-level code.
/// - Reports every malformed line, not just the first.
pub mod parser;
/// The preprocess module expands include directives.
///
/// Runs on the raw source before scanning; lines of the form `!path` are
/// replaced by the file they name.
pub mod preprocess;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers and borrowed strings.
/// - Defines the per-invocation variable table and its loop marker.
pub mod value;
