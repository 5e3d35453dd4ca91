use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        parser::core::Parser,
        token::{TokenKind, TokenSource},
    },
};

/// Operator binding power, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `-x` and `!x`.
    Prefix,
    /// Call application, `f(x)`.
    Call,
}

impl Precedence {
    /// Maps a token kind to its binding power in infix position.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::{parser::binary::Precedence, token::TokenKind};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

impl<S: TokenSource> Parser<S> {
    /// Parses `<left> <op> <right>` with the operator as the current token.
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// operator of the same level that follows it ends up outside, giving
    /// `1 - 2 - 3` the shape `((1 - 2) - 3)`.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = InfixOperator::from_token(token.kind)?;
        let precedence = self.current_precedence();

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { token,
                                 left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }
}
