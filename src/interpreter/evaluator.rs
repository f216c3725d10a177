/// Core evaluation logic.
///
/// Contains the `Evaluator`, the `Flow` signal returned by statements, the
/// top-level `interpret` loop and the expression/statement dispatch.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements prefix negation and identity on numeric values.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, string concatenation and char equality,
/// dispatching on the pair of operand kinds.
pub mod binary;

/// Evaluation of loop statements.
///
/// Runs `while` and `for` loops and consumes the `break`/`continue` signals
/// their bodies return.
pub mod loops;

/// Utility functions for evaluation.
///
/// Variable lookup, scope handling and block execution.
pub mod utils;
