/// Binary operator dispatch.
///
/// Routes an operation to the handler for its pair of operand kinds.
pub mod core;

/// Numeric arithmetic.
///
/// Integer and float `+ - * /`, with overflow and division-by-zero checks.
pub mod scalar;

/// Comparison operators.
///
/// Shared logic for `== != < <= > >=` producing integer truth values.
pub mod comparison;

/// String and char operators.
///
/// Concatenation and equality for text values.
pub mod text;
