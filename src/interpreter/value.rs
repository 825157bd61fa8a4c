/// Runtime values.
///
/// Defines the `Value` type produced by evaluation. Strings are borrowed from
/// the source buffer; numbers are 64-bit signed integers.
pub mod core;

/// Variable tables.
///
/// Defines `Frame`, the flat name-to-value table owned by one invocation,
/// together with the marker of the loop that is currently active in it.
pub mod frame;
