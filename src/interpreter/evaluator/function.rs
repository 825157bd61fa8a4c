/// The `call` keyword.
///
/// Looks up user-defined functions, checks arity, binds arguments into a
/// fresh frame and evaluates the body.
pub mod core;
/// The `print` built-in.
///
/// Writes its arguments, concatenated, followed by a newline.
pub mod print;
/// The `exit` built-in.
pub mod exit;
