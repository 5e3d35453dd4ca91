use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::binary::Precedence,
        token::{Token, TokenKind, TokenSource},
    },
};

/// Parses the expression that starts at the current token.
pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;
/// Parses the rest of an expression whose left operand is already built; the
/// current token is the operator.
pub type InfixParseFn<S> = fn(&mut Parser<S>, Expression) -> Option<Expression>;

/// A Pratt parser over a [`TokenSource`].
///
/// The parser looks at two tokens at a time, `current` and `peek`. Expression
/// forms are driven entirely by two registries keyed by token kind: one for
/// tokens that can start an expression and one for tokens that continue one
/// as an operator. Both are filled once, in [`Parser::new`]; adding a new
/// literal or operator means registering one more function without touching
/// the precedence loop in [`Parser::parse_expression`].
///
/// Malformed input never stops the parser. Each problem is recorded in
/// [`Parser::errors`], the offending statement is dropped, and parsing
/// resumes at the next statement.
pub struct Parser<S> {
    source:                S,
    pub(super) current:    Token,
    pub(super) peek:       Token,
    errors:                Vec<ParseError>,
    prefix_parse_fns:      HashMap<TokenKind, PrefixParseFn<S>>,
    infix_parse_fns:       HashMap<TokenKind, InfixParseFn<S>>,
}

impl<'source> Parser<Lexer<'source>> {
    /// Creates a parser that lexes `source` on demand.
    #[must_use]
    pub fn from_source(source: &'source str) -> Self {
        Self::new(Lexer::new(source))
    }
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser, pulling the first two tokens from `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Self { source,
                                current,
                                peek,
                                errors: Vec::new(),
                                prefix_parse_fns: HashMap::new(),
                                infix_parse_fns: HashMap::new() };

        parser.register_prefix(TokenKind::Ident, Self::parse_identifier);
        parser.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::True, Self::parse_boolean);
        parser.register_prefix(TokenKind::False, Self::parse_boolean);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Self::parse_if_expression);

        for kind in [TokenKind::Plus,
                     TokenKind::Minus,
                     TokenKind::Asterisk,
                     TokenKind::Slash,
                     TokenKind::Eq,
                     TokenKind::NotEq,
                     TokenKind::Lt,
                     TokenKind::Gt]
        {
            parser.register_infix(kind, Self::parse_infix_expression);
        }

        parser
    }

    /// Associates `kind` in prefix position with `parse_fn`, replacing any
    /// earlier registration.
    pub fn register_prefix(&mut self, kind: TokenKind, parse_fn: PrefixParseFn<S>) {
        self.prefix_parse_fns.insert(kind, parse_fn);
    }

    /// Associates `kind` in infix position with `parse_fn`, replacing any
    /// earlier registration.
    pub fn register_infix(&mut self, kind: TokenKind, parse_fn: InfixParseFn<S>) {
        self.infix_parse_fns.insert(kind, parse_fn);
    }

    /// The token the parser is positioned on.
    ///
    /// Custom parse functions registered through [`Parser::register_prefix`]
    /// and [`Parser::register_infix`] read the token they were invoked for
    /// from here.
    #[must_use]
    pub const fn current_token(&self) -> &Token {
        &self.current
    }

    /// Diagnostics recorded so far, in source order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; the reason
    /// is in [`Parser::errors`]. Callers must check it before trusting the
    /// result.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::from_source("5 + 5 * 2;");
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "(5 + (5 * 2))");
    /// ```
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");

        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix function for the current token builds the leftmost operand.
    /// Then, as long as the next token is an infix operator binding tighter
    /// than `precedence`, that operator takes the expression so far as its
    /// left operand. An operator of equal precedence is left for the caller,
    /// which makes same-level operators associate to the left.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.current.kind).copied() else {
            self.record(ParseError::NoPrefixParseFn { kind: self.current.kind });
            return None;
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };

            self.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Moves the window forward by one token.
    pub(super) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.source.next_token());
    }

    /// Records a diagnostic.
    pub(super) fn record(&mut self, error: ParseError) {
        debug!(%error, "recorded parse diagnostic");
        self.errors.push(error);
    }
}
