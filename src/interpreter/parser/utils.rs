use crate::{
    error::ParseError,
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::{TokenKind, TokenSource},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Returns `true` if the current token has the given kind.
    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// Returns `true` if the next token has the given kind.
    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances onto the next token if it has the expected kind.
    ///
    /// Otherwise records an [`ParseError::UnexpectedToken`], leaves the
    /// window where it is, and returns `None` so the caller can abandon the
    /// construct with `?`.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.advance();
            return Some(());
        }

        self.record(ParseError::UnexpectedToken { expected: kind,
                                                  found:    self.peek.kind, });
        None
    }

    /// Binding power of the next token as an infix operator.
    pub(super) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    /// Binding power of the current token as an infix operator.
    pub(super) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}
