use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_kind},
        },
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching `}` token is encountered. Scoping is not decided here: the
/// evaluator opens a scope when it executes the block.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
///
/// # Errors
/// Returns a `ParseError` if a nested statement fails to parse or the input
/// ends before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, TokenKind::LBrace, "Expected '{'.")?;
    let mut statements = Vec::new();

    while !matches!(peek_kind(tokens), TokenKind::RBrace | TokenKind::EndOfFile) {
        statements.push(parse_statement(tokens)?);
    }

    expect(tokens, TokenKind::RBrace, "Expected '}' after block.")?;

    Ok(Statement::Block { statements,
                          line: open.line })
}
