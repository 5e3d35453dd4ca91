use std::fmt;

use logos::Logos;

/// The closed set of token kinds produced by the lexer.
///
/// `TokenKind` is also the `logos` automaton: every variant carrying a
/// `#[token]` or `#[regex]` attribute is matched directly from source text.
/// [`TokenKind::Eof`] and [`TokenKind::Illegal`] are never matched; the
/// [`Lexer`](crate::interpreter::lexer::Lexer) produces them itself when the
/// input is exhausted or a character is not recognized.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum TokenKind {
    /// End of input. Repeated forever once the source is drained.
    Eof,
    /// A character the lexer does not recognize.
    Illegal,

    /// Identifier tokens, such as `x` or `foo_bar`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// `// Comments.` Skipped by the lexer.
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
}

impl TokenKind {
    /// The name used for this kind in parser diagnostics.
    ///
    /// Operators and delimiters are named by their glyph, everything else by
    /// an upper-case tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A minimal lexical unit: its kind plus the exact source text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The matched source text. Empty for [`TokenKind::Eof`].
    pub literal: String,
}

impl Token {
    /// Creates a token of `kind` from its literal text.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Ident, "five");
    /// assert_eq!(token.literal, "five");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input sentinel.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// A pull-based supply of tokens for the parser.
///
/// Exhaustion is never an error: once drained, a source keeps returning
/// [`Token::eof`].
pub trait TokenSource {
    /// Returns the next token of the stream.
    fn next_token(&mut self) -> Token;
}

impl<I> TokenSource for I where I: Iterator<Item = Token>
{
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(Token::eof)
    }
}
