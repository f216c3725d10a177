/// Parsing errors.
///
/// Defines the error raised when the token stream does not match the grammar.
/// A parse error aborts the whole parse; no partial tree is returned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution, such as division by zero, undefined variables or unsupported
/// operand combinations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program through [`crate::run`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source did not parse. Nothing was executed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Execution stopped at a runtime fault. Output produced before the
    /// fault has already been written.
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
