/// Core parsing logic.
///
/// Contains the program entry point, the expression entry point and the
/// shared `ParseResult` type.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement and parses `print`,
/// assignments, `if`, `while`, `for`, `break` and `continue`.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Binary operator parsing.
///
/// Implements the precedence levels from equality down to multiplication,
/// folding each level left to right.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `-`/`+`, literals, variable references and parenthesized
/// sub-expressions.
pub mod unary;

/// Parsing utilities.
///
/// Token expectations, lookahead helpers and string literal escapes.
pub mod utils;
