use mscript::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
    error::ParseError,
    parse,
};

fn int(n: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn print(expr: Expr) -> Statement {
    Statement::Print { expr, line: 1 }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(statements) => panic!("Parsed {statements:?} but expected an error"),
        Err(e) => e,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse("print 1 + 2 * 3;").unwrap(),
               [print(binary(int(1),
                             BinaryOperator::Add,
                             binary(int(2), BinaryOperator::Mul, int(3))))]);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(parse("print 1 - 2 - 3;").unwrap(),
               [print(binary(binary(int(1), BinaryOperator::Sub, int(2)),
                             BinaryOperator::Sub,
                             int(3)))]);
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(parse("print a < b == 1;").unwrap(),
               [print(binary(binary(var("a"), BinaryOperator::Less, var("b")),
                             BinaryOperator::Equal,
                             int(1)))]);
}

#[test]
fn unary_operators_nest() {
    let expected = Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Plus,
                                                                  expr: Box::new(int(1)),
                                                                  line: 1, }),
                                   line: 1, };

    assert_eq!(parse("print -+1;").unwrap(), [print(expected)]);
}

#[test]
fn literals() {
    assert_eq!(parse("print 2.5; print 'c'; print \"a\\nb\";").unwrap(),
               [print(Expr::Literal { value: LiteralValue::Float(2.5),
                                      line:  1, }),
                print(Expr::Literal { value: LiteralValue::Char('c'),
                                      line:  1, }),
                print(Expr::Literal { value: LiteralValue::from("a\nb"),
                                      line:  1, })]);
}

#[test]
fn dangling_else_attaches_to_inner_if() {
    let statements = parse("if (a) if (b) print 1; else print 2;").unwrap();

    let [Statement::If { then_branch,
                         else_branch: None,
                         .. }] = statements.as_slice()
    else {
        panic!("expected a single outer if without else, got {statements:?}");
    };
    assert!(matches!(then_branch.as_ref(), Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn for_loop_clauses() {
    let statements = parse("for (i = 0; i < 3; i = i + 1) print i;").unwrap();

    let [Statement::For { context, line: 1 }] = statements.as_slice() else {
        panic!("expected a for loop, got {statements:?}");
    };
    assert!(matches!(context.initializer.as_deref(), Some(Statement::Assignment { name, .. }) if name == "i"));
    assert_eq!(context.condition, Some(binary(var("i"), BinaryOperator::Less, int(3))));
    assert!(matches!(context.increment.as_deref(), Some(Statement::Assignment { .. })));
    assert_eq!(*context.body, print(var("i")));
}

#[test]
fn for_loop_initializer_may_be_empty() {
    let statements = parse("for (; i < 3; i = i + 1) {}").unwrap();

    let [Statement::For { context, .. }] = statements.as_slice() else {
        panic!("expected a for loop, got {statements:?}");
    };
    assert!(context.initializer.is_none());
    assert!(matches!(context.body.as_ref(), Statement::Block { statements, .. } if statements.is_empty()));
}

#[test]
fn statements_record_lines() {
    let statements = parse("x = 1;\n\nwhile (x < 3)\n  x = x + 1;\nbreak;").unwrap();

    let lines: Vec<usize> = statements.iter().map(Statement::line_number).collect();
    assert_eq!(lines, [1, 3, 5]);
}

#[test]
fn missing_semicolon_at_end_of_input() {
    let error = parse_error("print 1");

    assert_eq!(error,
               ParseError::UnexpectedEndOfInput { expected: "Expected ';' after value.".to_string(),
                                                  line:     1, });
}

#[test]
fn error_messages_name_the_offending_lexeme() {
    assert_eq!(parse_error("x = ;").to_string(),
               "Error on line 1 at ';': Expected expression.");
    assert_eq!(parse_error("@;").to_string(),
               "Error on line 1 at '@': Expected a statement.");
    assert_eq!(parse_error("x + 1;").to_string(),
               "Error on line 1 at 'x': Expected a statement.");
    assert_eq!(parse_error("break").to_string(),
               "Error on line 1 at end of input: Expected ';' after 'break'.");
}

#[test]
fn error_lines_follow_the_source() {
    let error = parse_error("print 1;\nprint (2;");

    assert_eq!(error.line(), 2);
    assert_eq!(error.to_string(), "Error on line 2 at ';': Expected ')' after expression.");
}

#[test]
fn unterminated_block() {
    assert_eq!(parse_error("{ print 1;").to_string(),
               "Error on line 1 at end of input: Expected '}' after block.");
}

#[test]
fn malformed_for_loops() {
    assert_eq!(parse_error("for (print 1; i < 3; i = i + 1) {}").to_string(),
               "Error on line 1 at 'print': Invalid initializer in 'for' loop.");
    assert_eq!(parse_error("for (i = 0; i < 3; print i) {}").to_string(),
               "Error on line 1 at 'print': Expected an assignment as the 'for' increment.");
    assert_eq!(parse_error("for (i = 0; i < 3; i = i + 1;) {}").to_string(),
               "Error on line 1 at ';': Expected ')' after for clauses.");
}

#[test]
fn integer_literal_out_of_range() {
    assert_eq!(parse_error("print 99999999999999999999;"),
               ParseError::LiteralTooLarge { lexeme: "99999999999999999999".to_string(),
                                             line:   1, });
}

#[test]
fn negated_minimum_integer_is_one_literal() {
    assert_eq!(parse("print -9223372036854775808;").unwrap(), [print(int(i64::MIN))]);
    assert!(matches!(parse_error("print 1 - 9223372036854775808;"),
                     ParseError::LiteralTooLarge { .. }));
    assert!(matches!(parse_error("print -9223372036854775809;"),
                     ParseError::LiteralTooLarge { .. }));
}
