/// Numeric conversion helpers.
///
/// This module provides a safe function for promoting integers to
/// floating-point values without risking silent rounding. The evaluator uses
/// it whenever an integer meets a float in a binary operation.
pub mod num;
