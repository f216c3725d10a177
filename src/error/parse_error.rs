use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    #[error("Error on line {line} at '{lexeme}': {expected}")]
    UnexpectedToken {
        /// The offending token's text.
        lexeme:   String,
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Error on line {line} at end of input: {expected}")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("Error on line {line}: Integer literal '{lexeme}' is too large.")]
    LiteralTooLarge {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Builds the error for `token` not matching `expected`.
    ///
    /// An end-of-file token yields [`ParseError::UnexpectedEndOfInput`];
    /// anything else yields [`ParseError::UnexpectedToken`].
    ///
    /// ## Example
    /// ```
    /// use mscript::{
    ///     error::ParseError,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let token = Token::new(TokenKind::Unknown, "@", 3);
    /// let error = ParseError::at(&token, "Expected expression.");
    ///
    /// assert_eq!(error.to_string(), "Error on line 3 at '@': Expected expression.");
    /// ```
    #[must_use]
    pub fn at(token: &Token, expected: impl Into<String>) -> Self {
        if token.is_eof() {
            Self::UnexpectedEndOfInput { expected: expected.into(),
                                         line:     token.line, }
        } else {
            Self::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                    expected: expected.into(),
                                    line:     token.line, }
        }
    }

    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
