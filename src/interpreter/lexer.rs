use logos::{Lexer, Logos};

/// Classifies a lexical token in the source input.
///
/// The variants mirror the language's lexical units one to one: literals,
/// identifiers, every operator and delimiter, and every keyword. Two special
/// kinds exist on top of those: [`TokenKind::EndOfFile`], which the
/// [`Scanner`] produces once the input is exhausted, and
/// [`TokenKind::Unknown`], which carries any character the language does not
/// recognize. The scanner never fails; rejecting unknown tokens is left to the
/// parser.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r]+")]
pub enum TokenKind {
    /// End of the input. Never matched by the lexer itself.
    EndOfFile,
    /// A character (or a malformed char literal) the language does not know.
    /// A lone `!` lands here as well, since only `!=` is an operator.
    #[token("!")]
    Unknown,

    /// Identifier tokens, such as `x` or `loop_count`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Floating-point literal tokens, such as `3.25`.
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    /// Char literal tokens, such as `'a'`.
    #[token("'", lex_char)]
    Char,
    /// String literal tokens, such as `"hello"`.
    #[token("\"", lex_string)]
    String,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Consumed by the [`Scanner`] to advance the line counter
    /// and never handed to the parser.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        TokenKind::Newline
    })]
    Newline,
}

/// A single lexical unit: its kind, the exact lexeme and the line it starts
/// on.
///
/// For string and char literals the lexeme is the text between the quotes.
/// For every other kind it is the source substring verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// The 1-based source line the token started on.
    pub line:   usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// Whether this token marks the end of the input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} {:?} '{}'", self.line, self.kind, self.lexeme)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics, and
/// whether the most recent string literal found its closing quote.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:          usize,
    /// Whether the last string literal was terminated by a `"`.
    pub string_closed: bool,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:          1,
               string_closed: false, }
    }
}

/// Lexes the body of a string literal after its opening quote.
///
/// Consumes up to and including the next `"` that is not preceded by a
/// backslash. An unterminated literal runs to the end of the input; that is
/// not an error at this layer. Newlines inside the literal advance the line
/// counter.
fn lex_string(lex: &mut Lexer<TokenKind>) -> TokenKind {
    let rest = lex.remainder();
    let mut end = rest.len();
    let mut closed = false;
    let mut escaped = false;

    for (index, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => {
                end = index + 1;
                closed = true;
                break;
            },
            _ => {},
        }
    }

    let newlines = rest[..end].matches('\n').count();
    lex.extras.line += newlines;
    lex.extras.string_closed = closed;
    lex.bump(end);

    TokenKind::String
}

/// Lexes a char literal after its opening quote.
///
/// Exactly one character followed by a closing `'` yields
/// [`TokenKind::Char`]. Any other shape yields [`TokenKind::Unknown`] for the
/// lone quote, leaving the rest of the input to be scanned normally.
fn lex_char(lex: &mut Lexer<TokenKind>) -> TokenKind {
    let mut chars = lex.remainder().chars();

    match (chars.next(), chars.next()) {
        (Some(c), Some('\'')) => {
            if c == '\n' {
                lex.extras.line += 1;
            }
            lex.bump(c.len_utf8() + 1);
            TokenKind::Char
        },
        _ => TokenKind::Unknown,
    }
}

/// Converts source text into tokens, one token per request.
///
/// The scanner wraps a logos lexer and adds the pieces logos does not
/// provide: line tracking that records where a token *starts*, quote
/// stripping for string and char literals, and a sticky end-of-file.
///
/// ## Example
/// ```
/// use mscript::interpreter::lexer::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("print x;");
///
/// assert_eq!(scanner.next_token().kind, TokenKind::Print);
/// assert_eq!(scanner.next_token().lexeme, "x");
/// assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
/// assert!(scanner.next_token().is_eof());
/// assert!(scanner.next_token().is_eof());
/// ```
pub struct Scanner<'src> {
    lexer: Lexer<'src, TokenKind>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: TokenKind::lexer_with_extras(source, LexerExtras::default()), }
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every further call returns an end-of-file
    /// token. Characters the lexer cannot match become unknown tokens carrying
    /// that text.
    pub fn next_token(&mut self) -> Token {
        loop {
            let line = self.lexer.extras.line;

            let Some(result) = self.lexer.next() else {
                return Token::new(TokenKind::EndOfFile, "", line);
            };

            let kind = match result {
                Ok(TokenKind::Newline) => continue,
                Ok(kind) => kind,
                Err(()) => TokenKind::Unknown,
            };

            let token = Token::new(kind, self.lexeme(kind), line);
            tracing::trace!(line, kind = ?token.kind, lexeme = %token.lexeme, "scanned token");

            return token;
        }
    }

    /// Drains the scanner, returning every token up to and including the
    /// end-of-file token.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);

            if done {
                return tokens;
            }
        }
    }

    /// Extracts the lexeme for the token the lexer just produced.
    fn lexeme(&self, kind: TokenKind) -> String {
        let slice = self.lexer.slice();

        match kind {
            TokenKind::String => {
                let body = &slice[1..];
                if self.lexer.extras.string_closed {
                    body[..body.len() - 1].to_owned()
                } else {
                    body.to_owned()
                }
            },
            TokenKind::Char => slice[1..slice.len() - 1].to_owned(),
            _ => slice.to_owned(),
        }
    }
}
