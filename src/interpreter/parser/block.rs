use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        parser::core::Parser,
        token::{TokenKind, TokenSource},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses the statements of a block, with the opening `{` as the current
    /// token.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// Leaves the closing `}` as the current token. Input that ends before the
    /// block is closed records an [`ParseError::UnexpectedToken`] but still
    /// yields the statements parsed so far.
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.record(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                          found:    TokenKind::Eof, });
                break;
            }

            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        BlockStatement { token, statements }
    }
}
