use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
///
/// A drained iterator reads as end-of-file.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek().map_or(TokenKind::EndOfFile, |token| token.kind)
}

/// Builds an error for the next token, which does not match `expected`.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseError
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek().map_or_else(|| ParseError::UnexpectedEndOfInput { expected: expected.to_owned(),
                                                                    line:     0, },
                              |token| ParseError::at(token, expected))
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns a `ParseError` carrying `expected` when the next token is of any
/// other kind, or when the stream has ended.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next_if(|token| token.kind == kind)
          .ok_or_else(|| unexpected(tokens, expected))
}

/// Checks for `<identifier> =` without consuming anything.
///
/// This is the two-token lookahead that separates an assignment from any
/// other statement starting with a name.
pub(in crate::interpreter::parser) fn is_assignment_start<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();

    matches!(lookahead.next(), Some(token) if token.kind == TokenKind::Identifier)
    && matches!(lookahead.next(), Some(token) if token.kind == TokenKind::Equal)
}

/// Resolves backslash escapes in the raw text of a string literal.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\0`, `\\`, `\"` and `\'`. Any
/// other backslash sequence is kept as written, and a trailing lone
/// backslash is kept too.
///
/// # Example
/// ```
/// use mscript::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape(r#"say \"hi\"\n"#), "say \"hi\"\n");
/// assert_eq!(unescape(r"\q"), r"\q");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some('0') => text.push('\0'),
            Some(escaped @ ('\\' | '"' | '\'')) => text.push(escaped),
            Some(other) => {
                text.push('\\');
                text.push(other);
            },
            None => text.push('\\'),
        }
    }

    text
}
