#[derive(Debug, thiserror::Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that is not bound in any active scope.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator is not defined for this pair of operand kinds.
    #[error("Error on line {line}: Unsupported binary operation '{op}' on {left} and {right}.")]
    UnsupportedBinaryOperation {
        /// The operator lexeme.
        op:    String,
        /// Kind of the left operand.
        left:  &'static str,
        /// Kind of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operator is not defined for this operand kind.
    #[error("Error on line {line}: Unsupported unary operation '{op}' on {operand}.")]
    UnsupportedUnaryOperation {
        /// The operator lexeme.
        op:      String,
        /// Kind of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer cannot be promoted to a float without losing precision.
    #[error("Error on line {line}: Integer {value} is too large to be converted to a float exactly.")]
    IntegerTooLarge {
        /// The integer that failed to convert.
        value: i64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `break` or `continue` executed with no enclosing loop.
    #[error("Error on line {line}: '{keyword}' used outside of a loop.")]
    OutsideLoop {
        /// Either `break` or `continue`.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The evaluator tried to pop the global scope.
    #[error("Attempted to pop the global scope.")]
    ScopeUnderflow,
    /// Writing program output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
