use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unescape, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Prefix `-` and `+` bind tighter than any binary operator and nest to the
/// right, so `--x` is `-(-x)`.
///
/// Grammar: `unary := ("-" | "+") unary | primary`
///
/// `-9223372036854775808` is folded into a single `i64::MIN` literal, since
/// its magnitude alone does not fit in an `i64`.
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::UnaryOp` node, or the primary expression when no prefix
/// operator is present.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) =
        tokens.next_if(|token| matches!(token.kind, TokenKind::Minus | TokenKind::Plus))
    {
        if token.kind == TokenKind::Minus
           && tokens.next_if(is_min_magnitude).is_some()
        {
            return Ok(Expr::Literal { value: LiteralValue::Integer(i64::MIN),
                                      line:  token.line, });
        }

        let op = if token.kind == TokenKind::Minus {
            UnaryOperator::Negate
        } else {
            UnaryOperator::Plus
        };
        let expr = parse_unary(tokens)?;

        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  line: token.line });
    }

    parse_primary(tokens)
}

/// Whether `token` is the integer literal `9223372036854775808`.
fn is_min_magnitude(token: &&Token) -> bool {
    token.kind == TokenKind::Integer
    && token.lexeme.parse::<u64>() == Ok(i64::MIN.unsigned_abs())
}

/// Parses a primary expression.
///
/// A primary is a literal, a variable reference or a parenthesized
/// expression.
///
/// Grammar: `primary := INTEGER | FLOAT | CHAR | STRING | IDENTIFIER | "("
/// expression ")"`
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start an expression, the
/// closing parenthesis is missing, or an integer literal does not fit in 64
/// bits.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected(tokens, "Expected expression."));
    };

    let line = token.line;
    let value = match token.kind {
        TokenKind::Integer => {
            let n = token.lexeme
                         .parse::<i64>()
                         .map_err(|_| ParseError::LiteralTooLarge { lexeme: token.lexeme.clone(),
                                                                    line })?;
            LiteralValue::Integer(n)
        },
        TokenKind::Float => {
            let r = token.lexeme
                         .parse::<f64>()
                         .map_err(|_| ParseError::at(token, "Invalid float literal."))?;
            LiteralValue::Float(r)
        },
        TokenKind::Char => {
            let c = token.lexeme
                         .chars()
                         .next()
                         .ok_or_else(|| ParseError::at(token, "Empty char literal."))?;
            LiteralValue::Char(c)
        },
        TokenKind::String => LiteralValue::Str(unescape(&token.lexeme)),
        TokenKind::Identifier => {
            tokens.next();
            return Ok(Expr::Variable { name: token.lexeme.clone(),
                                       line });
        },
        TokenKind::LParen => return parse_grouping(tokens),
        _ => return Err(ParseError::at(token, "Expected expression.")),
    };

    tokens.next();
    Ok(Expr::Literal { value, line })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LParen, "Expected '('.")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen, "Expected ')' after expression.")?;

    Ok(expr)
}
