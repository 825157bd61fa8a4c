/// Reduction of groups and operations to a single value.
pub mod core;

/// Comparison operators on numbers and strings.
pub mod comparison;

/// Checked integer arithmetic.
pub mod scalar;
