use crate::{
    ast::{Expression, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::{TokenKind, TokenSource},
    },
};

impl<S: TokenSource> Parser<S> {
    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::from_token(self.current.clone())))
    }

    /// Parses a base-10 integer literal.
    ///
    /// Literals outside the `i64` range are reported as
    /// [`ParseError::InvalidInteger`].
    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if let Ok(value) = token.literal.parse::<i64>() {
            Some(Expression::IntegerLiteral { token, value })
        } else {
            self.record(ParseError::InvalidInteger { literal: token.literal });
            None
        }
    }

    #[allow(clippy::unnecessary_wraps)]
    pub(super) fn parse_boolean(&mut self) -> Option<Expression> {
        let value = self.current_is(TokenKind::True);
        Some(Expression::BooleanLiteral { token: self.current.clone(),
                                          value })
    }

    /// Parses `!x` or `-x`. The operand binds at prefix strength, so `-a * b`
    /// is `((-a) * b)`.
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = PrefixOperator::from_token(token.kind)?;

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token,
                                  operator,
                                  right: Box::new(right) })
    }

    /// Parses `( <expression> )`. The parentheses only group; they leave no
    /// node of their own.
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Some(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { token,
                              condition: Box::new(condition),
                              consequence,
                              alternative })
    }
}
