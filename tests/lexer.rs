use mscript::{
    interpreter::lexer::{Scanner, Token, TokenKind},
    tokenize,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).into_iter().map(|t| t.kind).collect()
}

fn lexemes(src: &str) -> Vec<String> {
    tokenize(src).into_iter().map(|t| t.lexeme).collect()
}

#[test]
fn assignment_statement() {
    use TokenKind::{EndOfFile, Equal, Identifier, Integer, Semicolon};

    assert_eq!(kinds("x = 42;"), [Identifier, Equal, Integer, Semicolon, EndOfFile]);
    assert_eq!(lexemes("x = 42;"), ["x", "=", "42", ";", ""]);
}

#[test]
fn operators_prefer_longest_match() {
    use TokenKind::{
        BangEqual, EndOfFile, Equal, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Minus,
        Plus, Slash, Star,
    };

    assert_eq!(kinds("= == != < <= > >= + - * /"),
               [Equal,
                EqualEqual,
                BangEqual,
                Less,
                LessEqual,
                Greater,
                GreaterEqual,
                Plus,
                Minus,
                Star,
                Slash,
                EndOfFile]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{Break, Continue, Else, EndOfFile, For, Identifier, If, Print, While};

    assert_eq!(kinds("print if else while for break continue"),
               [Print, If, Else, While, For, Break, Continue, EndOfFile]);
    assert_eq!(kinds("printer _if while2 For"),
               [Identifier, Identifier, Identifier, Identifier, EndOfFile]);
}

#[test]
fn fixed_lexemes_reproduce_the_source() {
    use TokenKind::{
        BangEqual, Break, Comma, Continue, Else, Equal, EqualEqual, For, Greater, GreaterEqual,
        If, LBrace, LParen, Less, LessEqual, Minus, Plus, Print, RBrace, RParen, Semicolon, Slash,
        Star, While,
    };

    let expected = [("+", Plus),
                    ("-", Minus),
                    ("*", Star),
                    ("/", Slash),
                    ("=", Equal),
                    ("==", EqualEqual),
                    ("!=", BangEqual),
                    ("<", Less),
                    ("<=", LessEqual),
                    (">", Greater),
                    (">=", GreaterEqual),
                    ("(", LParen),
                    (")", RParen),
                    ("{", LBrace),
                    ("}", RBrace),
                    (";", Semicolon),
                    (",", Comma),
                    ("print", Print),
                    ("if", If),
                    ("else", Else),
                    ("while", While),
                    ("for", For),
                    ("break", Break),
                    ("continue", Continue)];

    let source = expected.iter().map(|(text, _)| *text).collect::<Vec<_>>().join(" ");
    let tokens = tokenize(&source);

    assert_eq!(tokens.len(), expected.len() + 1);
    for (token, (text, kind)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind, "kind of {text:?}");
        assert_eq!(token.lexeme, text);
        assert_eq!(token.line, 1);
    }
    assert!(tokens[expected.len()].is_eof());

    // Adjacent tokens without whitespace keep their own text.
    assert_eq!(lexemes("(a,b){}"), ["(", "a", ",", "b", ")", "{", "}", ""]);
}

#[test]
fn numbers() {
    assert_eq!(kinds("3.25 7"), [TokenKind::Float, TokenKind::Integer, TokenKind::EndOfFile]);
    assert_eq!(lexemes("3.25 7"), ["3.25", "7", ""]);
    assert_eq!(kinds("1."), [TokenKind::Integer, TokenKind::Unknown, TokenKind::EndOfFile]);
}

#[test]
fn string_lexeme_excludes_quotes() {
    let tokens = tokenize("\"hello world\"");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "hello world");
    assert!(tokens[1].is_eof());
}

#[test]
fn string_keeps_escapes_raw() {
    let tokens = tokenize(r#""a\"b" x"#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#"a\"b"#);
    assert_eq!(tokens[1].lexeme, "x");
}

#[test]
fn unterminated_string_runs_to_end() {
    let tokens = tokenize("\"abc");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "abc");
    assert!(tokens[1].is_eof());
}

#[test]
fn char_literals() {
    let tokens = tokenize("'a'");
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].lexeme, "a");

    assert_eq!(kinds("'ab'"),
               [TokenKind::Unknown, TokenKind::Identifier, TokenKind::Unknown, TokenKind::EndOfFile]);
    assert_eq!(kinds("''"), [TokenKind::Unknown, TokenKind::Unknown, TokenKind::EndOfFile]);
}

#[test]
fn char_literal_may_hold_a_newline() {
    let tokens = tokenize("'\n' x");

    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].lexeme, "\n");
    assert_eq!(tokens[0].line, 1);
    assert_eq!((tokens[1].lexeme.as_str(), tokens[1].line), ("x", 2));
    assert!(tokens[2].is_eof());
}

#[test]
fn unknown_characters_become_tokens() {
    let tokens = tokenize("@ # !");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Unknown, TokenKind::Unknown, TokenKind::Unknown, TokenKind::EndOfFile]);
    assert_eq!(tokens.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>(),
               ["@", "#", "!", ""]);
}

#[test]
fn comments_are_skipped() {
    let tokens = tokenize("x // ignored = 1;\r\ny // trailing");

    assert_eq!(tokens.len(), 3);
    assert_eq!((tokens[0].lexeme.as_str(), tokens[0].line), ("x", 1));
    assert_eq!((tokens[1].lexeme.as_str(), tokens[1].line), ("y", 2));
}

#[test]
fn tokens_record_their_starting_line() {
    let lines: Vec<usize> = tokenize("print 1;\n\nprint\n2;").iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 1, 3, 4, 4, 4]);

    let tokens = tokenize("\"a\nb\" x");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[0].lexeme, "a\nb");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn end_of_file_is_sticky() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = scanner.next_token();
        assert!(token.is_eof());
        assert_eq!(token.lexeme, "");
    }
}

#[test]
fn empty_source_is_just_end_of_file() {
    assert_eq!(tokenize(""), [Token::new(TokenKind::EndOfFile, "", 1)]);
    assert_eq!(kinds(" \t\r\n "), [TokenKind::EndOfFile]);
}

#[test]
fn token_display() {
    assert_eq!(Token::new(TokenKind::Print, "print", 3).to_string(), "   3 Print 'print'");
}
