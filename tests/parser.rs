use monkey::{
    ast::{Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    interpreter::{
        parser::core::Parser,
        token::{Token, TokenKind},
    },
    parse,
};
use pretty_assertions::assert_eq;

fn parse_clean(source: &str) -> Program {
    parse(source).unwrap_or_else(|errors| panic!("{source:?} failed to parse:\n{errors}"))
}

fn diagnostics(source: &str) -> Vec<String> {
    let mut parser = Parser::from_source(source);
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn let_statement_binds_name_to_value() {
    let program = parse_clean("let x = 5;");

    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Let { token, name, value } => {
            assert_eq!(token.literal, "let");
            assert_eq!(name.value, "x");
            assert_eq!(name.token.literal, "x");
            assert!(matches!(value, Some(Expression::IntegerLiteral { value: 5, .. })));
        },
        other => panic!("expected a let statement, got {other:?}"),
    }
}

#[test]
fn let_statements_render_canonically() {
    let program = parse_clean("let x = 5; let y = true; let foobar = y;");

    let rendered: Vec<String> = program.statements.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, ["let x = 5;", "let y = true;", "let foobar = y;"]);
}

#[test]
fn let_terminator_is_optional_at_end_of_input() {
    let program = parse_clean("let x = 5");

    assert_eq!(program.to_string(), "let x = 5;");
}

#[test]
fn return_statements() {
    let program = parse_clean("return 5; return x + y; return;");

    let rendered: Vec<String> = program.statements.iter().map(ToString::to_string).collect();

    assert_eq!(rendered, ["return 5;", "return (x + y);", "return;"]);
    assert!(matches!(program.statements[2], Statement::Return { value: None, .. }));
}

#[test]
fn return_without_value_inside_block() {
    let program = parse_clean("if (x) { return }");

    assert_eq!(program.to_string(), "ifx return;");
}

#[test]
fn identifier_and_literal_expressions() {
    let program = parse_clean("foobar; 5; true; false;");

    assert_eq!(program.statements.len(), 4);
    assert!(matches!(&program.statements[0],
                     Statement::Expression { expression: Expression::Identifier(Identifier { value, .. }), .. }
                     if value == "foobar"));
    assert!(matches!(&program.statements[1],
                     Statement::Expression { expression: Expression::IntegerLiteral { value: 5, .. }, .. }));
    assert!(matches!(&program.statements[2],
                     Statement::Expression { expression: Expression::BooleanLiteral { value: true, .. }, .. }));
    assert!(matches!(&program.statements[3],
                     Statement::Expression { expression: Expression::BooleanLiteral { value: false, .. }, .. }));
}

#[test]
fn prefix_expressions() {
    let program = parse_clean("!5; -15; !true;");

    let operators: Vec<PrefixOperator> =
        program.statements
               .iter()
               .map(|statement| match statement {
                   Statement::Expression { expression: Expression::Prefix { operator, .. },
                                           .. } => *operator,
                   other => panic!("expected a prefix expression, got {other:?}"),
               })
               .collect();

    assert_eq!(operators,
               [PrefixOperator::Not, PrefixOperator::Negate, PrefixOperator::Not]);
}

#[test]
fn infix_expressions() {
    let cases = [("5 + 5;", InfixOperator::Add),
                 ("5 - 5;", InfixOperator::Sub),
                 ("5 * 5;", InfixOperator::Mul),
                 ("5 / 5;", InfixOperator::Div),
                 ("5 > 5;", InfixOperator::Greater),
                 ("5 < 5;", InfixOperator::Less),
                 ("5 == 5;", InfixOperator::Equal),
                 ("5 != 5;", InfixOperator::NotEqual),
                 ("true == false", InfixOperator::Equal)];

    for (source, expected) in cases {
        let program = parse_clean(source);

        match &program.statements[..] {
            [Statement::Expression { expression: Expression::Infix { operator, .. },
                                     .. }] => assert_eq!(*operator, expected, "{source}"),
            other => panic!("{source}: expected one infix expression, got {other:?}"),
        }
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("5 + 5 * 2;", "(5 + (5 * 2))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))")];

    for (source, expected) in cases {
        assert_eq!(parse_clean(source).to_string(), expected, "{source}");
    }
}

#[test]
fn if_expression() {
    let program = parse_clean("if (x < y) { x }");

    match &program.statements[..] {
        [Statement::Expression { expression:
                                     Expression::If { condition,
                                                      consequence,
                                                      alternative,
                                                      .. },
                                 .. }] => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.statements.len(), 1);
            assert_eq!(consequence.to_string(), "x");
            assert!(alternative.is_none());
        },
        other => panic!("expected one if expression, got {other:?}"),
    }
}

#[test]
fn if_else_expression() {
    let program = parse_clean("if (x < y) { x } else { y }");

    assert_eq!(program.to_string(), "if(x < y) xelse y");
}

#[test]
fn program_renders_in_statement_order() {
    let program = parse_clean("let myVar = anotherVar; return myVar;");

    assert_eq!(program.to_string(), "let myVar = anotherVar;return myVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn missing_assign_is_reported() {
    let mut parser = Parser::from_source("let x 5;");
    let program = parser.parse_program();

    assert_eq!(diagnostics("let x 5;"),
               ["expected next token to be =, got INT instead"]);
    assert!(program.statements
                   .iter()
                   .all(|statement| !matches!(statement, Statement::Let { .. })));
}

#[test]
fn every_bad_statement_is_reported() {
    assert_eq!(diagnostics("let = 10; let 838383;"),
               ["expected next token to be IDENT, got = instead",
                "no prefix parse function for = found",
                "expected next token to be IDENT, got INT instead"]);
}

#[test]
fn parsing_continues_after_a_bad_statement() {
    let mut parser = Parser::from_source("let x 5; let y = 10;");
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.to_string(), "5let y = 10;");
}

#[test]
fn tokens_without_prefix_form_are_reported() {
    assert_eq!(diagnostics("@"), ["no prefix parse function for ILLEGAL found"]);
    assert_eq!(diagnostics("fn"), ["no prefix parse function for FUNCTION found"]);
}

#[test]
fn oversized_integer_literal_is_reported() {
    assert_eq!(diagnostics("92233720368547758070"),
               ["could not parse \"92233720368547758070\" as integer"]);
}

#[test]
fn unclosed_block_is_reported() {
    assert_eq!(diagnostics("if (x) { x"),
               ["expected next token to be }, got EOF instead"]);
}

#[test]
fn missing_parenthesis_is_reported() {
    assert_eq!(diagnostics("(1 + 2"), ["expected next token to be ), got EOF instead"]);
    assert_eq!(diagnostics("if x { 1 }")[0],
               "expected next token to be (, got IDENT instead");
}

#[test]
fn parser_reads_from_any_token_source() {
    let tokens = vec![Token::new(TokenKind::Int, "1"),
                      Token::new(TokenKind::Plus, "+"),
                      Token::new(TokenKind::Int, "2"),
                      Token::new(TokenKind::Asterisk, "*"),
                      Token::new(TokenKind::Int, "3")];

    let mut parser = Parser::new(tokens.into_iter());
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(1 + (2 * 3))");
}

#[test]
fn registries_accept_new_prefix_forms() {
    fn parse_function_keyword<S>(parser: &mut Parser<S>) -> Option<Expression>
        where S: monkey::interpreter::token::TokenSource
    {
        Some(Expression::Identifier(Identifier::from_token(parser.current_token().clone())))
    }

    let mut parser = Parser::from_source("fn + 1");
    parser.register_prefix(TokenKind::Function, parse_function_keyword);
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(fn + 1)");
}
