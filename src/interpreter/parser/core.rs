use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_equality, statement::parse_statement, utils::peek_kind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed one after another until the end-of-file token. The
/// first grammar violation aborts the parse; no partial program is returned.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The full token stream, normally ending in an end-of-file
///   token as produced by [`Scanner::tokenize`](crate::interpreter::lexer::Scanner::tokenize).
///
/// # Returns
/// The program's statements in source order.
///
/// # Example
/// ```
/// use mscript::interpreter::{lexer::Scanner, parser::core::parse};
///
/// let tokens = Scanner::new("x = 1; print x;").tokenize();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while peek_kind(&mut iter) != TokenKind::EndOfFile {
        statements.push(parse_statement(&mut iter)?);
    }

    tracing::debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_equality(tokens)
}
