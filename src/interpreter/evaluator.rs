/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the cursor loop that walks an expression
/// sequence, and the keyword dispatch.
pub mod core;

/// Binary operator evaluation logic.
///
/// Reduces operations and groups to a single value, with checked integer
/// arithmetic, 0/1 comparisons and lexicographic string comparison.
pub mod binary;

/// Keyword calls.
///
/// Handles `call` for user-defined functions and the `print` and `exit`
/// built-ins.
pub mod function;

/// Evaluation of `for` and the `end` that closes it.
///
/// Loops rewind the cursor of the sequence being evaluated; only one loop can
/// be active per frame.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides literal resolution and argument checks shared by the other
/// evaluator modules.
pub mod utils;
