use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A recoverable syntax problem recorded by the parser.
///
/// Parse errors never stop the parser; they are collected in source order and
/// rendered one per line for the user.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The kind the grammar expected.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
    },
    /// A token appeared in expression position but cannot start an
    /// expression.
    NoPrefixParseFn {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal does not fit in 64 signed bits.
    InvalidInteger {
        /// The literal source text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse \"{literal}\" as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Every diagnostic produced while parsing one input.
///
/// Returned by [`crate::parse`] and [`crate::evaluate`] when the input cannot
/// be evaluated. Renders the way the REPL reports it: a header line followed
/// by one tab-indented line per diagnostic.
///
/// ## Example
/// ```
/// use monkey::parse;
///
/// let errors = parse("let x 5;").unwrap_err();
///
/// assert_eq!(errors.to_string(),
///            " parser errors:\n\texpected next token to be =, got INT instead\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// The diagnostics in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " parser errors:")?;
        for error in &self.0 {
            writeln!(f, "\t{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
