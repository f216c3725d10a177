//! # mscript
//!
//! mscript is a small interpreted scripting language written in Rust.
//! Source text is scanned into tokens, parsed into a syntax tree and executed
//! by a tree-walking evaluator with lexical scoping and `break`/`continue`.
//!
//! ```
//! let source = r#"
//!     total = 0;
//!     for (i = 1; i <= 4; i = i + 1) {
//!         total = total + i;
//!     }
//!     print "total: " + "done";
//!     print total;
//! "#;
//!
//! let mut out = Vec::new();
//! mscript::run(source, &mscript::Options::default(), &mut out, std::io::sink()).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "total: done\n10\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        environment::ScopePolicy,
        evaluator::core::Evaluator,
        lexer::{Scanner, Token},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per expression and statement form.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the parse error raised on grammar violations.
/// - Defines the runtime errors raised during execution.
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the execution pipeline.
///
/// This module ties together scanning, parsing, variable state, values and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// # Responsibilities
/// - Promote integers to floats without silent precision loss.
pub mod util;

/// Settings for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// How assignments treat names already bound in an outer scope.
    pub scope_policy: ScopePolicy,
}

/// Scans `source` into its full token stream, end-of-file token included.
///
/// # Example
/// ```
/// use mscript::{interpreter::lexer::TokenKind, tokenize};
///
/// let kinds: Vec<TokenKind> = tokenize("x == 1").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::EqualEqual,
///             TokenKind::Integer,
///             TokenKind::EndOfFile]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokenize()
}

/// Scans and parses `source` into its statements.
///
/// # Errors
/// Returns the first `ParseError` encountered.
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    interpreter::parser::core::parse(&tokenize(source))
}

/// Parses and executes a program.
///
/// Program output goes to `out`. Errors are reported to `err` as a single
/// line and also returned:
/// - a parse error means nothing was executed,
/// - a runtime error means execution stopped at the failing statement, with
///   the output of earlier statements already written.
///
/// # Example
/// ```
/// use mscript::{Options, error::Error, run};
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let result = run("print 1; print 1 / 0; print 2;", &Options::default(), &mut out, &mut err);
///
/// assert!(matches!(result, Err(Error::Runtime(_))));
/// assert_eq!(String::from_utf8(out).unwrap(), "1\n");
/// assert_eq!(String::from_utf8(err).unwrap(),
///            "Runtime error: Error on line 1: Division by zero.\n");
/// ```
pub fn run(source: &str, options: &Options, out: impl Write, mut err: impl Write) -> Result<(), Error> {
    let result = parse(source).map_err(Error::from).and_then(|statements| {
                                                        Evaluator::with_policy(out, options.scope_policy)
                                                            .interpret(&statements)
                                                            .map_err(Error::from)
                                                    });

    if let Err(error) = &result
       && let Err(io_error) = writeln!(err, "{error}")
    {
        tracing::warn!(%io_error, "failed to report error");
    }

    result
}
