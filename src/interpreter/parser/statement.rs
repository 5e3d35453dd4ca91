use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::{TokenKind, TokenSource},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return`, with or without a value,
    /// - an expression used as a statement.
    ///
    /// Every form stops with its last token (the `;` when there is one) as the
    /// current token. Returns `None` when the statement could not be parsed;
    /// the reason has been recorded.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Grammar: `let := "let" IDENT "=" expression ";"?`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::from_token(self.current.clone());
        self.expect_peek(TokenKind::Assign)?;

        self.advance();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Let { token, name, value })
    }

    /// Grammar: `return := "return" expression? ";"?`
    ///
    /// The value is absent when `return` is directly followed by `;`, `}` or
    /// the end of input.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
            return Some(Statement::Return { token, value: None });
        }
        if self.peek_is(TokenKind::RBrace) || self.peek_is(TokenKind::Eof) {
            return Some(Statement::Return { token, value: None });
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Return { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Expression { token, expression })
    }
}
