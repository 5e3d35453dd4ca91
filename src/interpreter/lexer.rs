use logos::Logos;
use tracing::trace;

use crate::interpreter::token::{Token, TokenKind};

/// Turns source text into a stream of [`Token`]s.
///
/// The lexer is an [`Iterator`] that stops after the last real token, and,
/// through the blanket impl, a [`TokenSource`](crate::interpreter::token::TokenSource)
/// that keeps answering [`TokenKind::Eof`] after that. Characters the
/// automaton does not recognize come out as [`TokenKind::Illegal`] tokens
/// rather than errors, so malformed input is reported by the parser.
///
/// ## Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("let x = 5;").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]);
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let kind = match self.inner.next()? {
            Ok(kind) => kind,
            Err(()) => TokenKind::Illegal,
        };
        let token = Token::new(kind, self.inner.slice());

        trace!(kind = %token.kind, literal = %token.literal, "lexed token");

        Some(token)
    }
}
