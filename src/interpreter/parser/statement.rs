use std::iter::Peekable;

use crate::{
    ast::{ForContext, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, is_assignment_start, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The first token decides the statement kind:
/// - `print` starts a print statement,
/// - `if`, `while` and `for` start the control constructs,
/// - `break` and `continue` are leaf statements,
/// - `{` starts a block,
/// - an identifier followed by `=` starts an assignment.
///
/// Anything else is a parse error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected(tokens, "Expected a statement."));
    };

    match token.kind {
        TokenKind::Print => parse_print(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::For => parse_for(tokens),
        TokenKind::Break | TokenKind::Continue => parse_loop_control(tokens),
        TokenKind::LBrace => parse_block(tokens),
        TokenKind::Identifier if is_assignment_start(tokens) => parse_assignment(tokens),
        _ => Err(ParseError::at(token, "Expected a statement.")),
    }
}

/// Parses `print <expression> ;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::Print, "Expected 'print'.")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "Expected ';' after value.")?;

    Ok(Statement::Print { expr,
                          line: keyword.line })
}

/// Parses an assignment statement, `<identifier> = <expression> ;`.
///
/// # Errors
/// Returns a `ParseError` if the name, the `=`, the expression or the
/// terminating `;` is missing.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let statement = parse_assignment_clause(tokens)?;
    expect(tokens, TokenKind::Semicolon, "Expected ';' after expression.")?;

    Ok(statement)
}

/// Parses `<identifier> = <expression>` with no terminator.
///
/// Used on its own for the increment clause of a `for` loop, which is closed
/// by `)` rather than `;`.
fn parse_assignment_clause<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = expect(tokens, TokenKind::Identifier, "Expected variable name.")?;
    expect(tokens, TokenKind::Equal, "Expected '=' after variable name.")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name: name.lexeme.clone(),
                               value,
                               line: name.line })
}

/// Parses `if (<condition>) <statement> [else <statement>]`.
///
/// An `else` is only consumed directly after a then-branch, so it always
/// binds to the nearest unmatched `if`.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::If, "Expected 'if'.")?;
    expect(tokens, TokenKind::LParen, "Expected '(' after 'if'.")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "Expected ')' after condition.")?;

    let then_branch = Box::new(parse_statement(tokens)?);
    let else_branch = if tokens.next_if(|token| token.kind == TokenKind::Else).is_some() {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line: keyword.line })
}

/// Parses `while (<condition>) <statement>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::While, "Expected 'while'.")?;
    expect(tokens, TokenKind::LParen, "Expected '(' after 'while'.")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "Expected ')' after condition.")?;
    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::While { condition,
                          body,
                          line: keyword.line })
}

/// Parses a `for` loop.
///
/// Syntax:
/// ```text
///     for ( [<identifier> = <expression>] ; <expression> ; <identifier> = <expression> ) <statement>
/// ```
///
/// The initializer may be left empty. The condition and the increment are
/// both required, and the increment must be an assignment.
///
/// # Errors
/// Returns a `ParseError` if the initializer is neither empty nor an
/// assignment, or if any clause or delimiter is missing.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = expect(tokens, TokenKind::For, "Expected 'for'.")?;
    expect(tokens, TokenKind::LParen, "Expected '(' after 'for'.")?;

    let initializer = if tokens.next_if(|token| token.kind == TokenKind::Semicolon).is_some() {
        None
    } else if is_assignment_start(tokens) {
        Some(Box::new(parse_assignment(tokens)?))
    } else {
        return Err(unexpected(tokens, "Invalid initializer in 'for' loop."));
    };

    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "Expected ';' after loop condition.")?;

    if !is_assignment_start(tokens) {
        return Err(unexpected(tokens, "Expected an assignment as the 'for' increment."));
    }
    let increment = Box::new(parse_assignment_clause(tokens)?);
    expect(tokens, TokenKind::RParen, "Expected ')' after for clauses.")?;

    let body = Box::new(parse_statement(tokens)?);

    Ok(Statement::For { context: ForContext { initializer,
                                              condition: Some(condition),
                                              increment: Some(increment),
                                              body },
                        line:    keyword.line, })
}

/// Parses `break ;` or `continue ;`.
fn parse_loop_control<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(keyword) =
        tokens.next_if(|token| matches!(token.kind, TokenKind::Break | TokenKind::Continue))
    else {
        return Err(unexpected(tokens, "Expected 'break' or 'continue'."));
    };

    expect(tokens,
           TokenKind::Semicolon,
           &format!("Expected ';' after '{}'.", keyword.lexeme))?;

    Ok(if keyword.kind == TokenKind::Break {
        Statement::Break { line: keyword.line }
    } else {
        Statement::Continue { line: keyword.line }
    })
}
