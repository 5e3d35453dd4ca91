use std::fmt;

use crate::interpreter::token::{Token, TokenKind};

/// A unary operator in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// `!`, logical negation by truthiness.
    Not,
    /// `-`, integer negation.
    Negate,
}

impl PrefixOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Negate),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Not => "!",
                        Self::Negate => "-",
                    })
    }
}

/// A binary operator in infix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl InfixOperator {
    /// Maps a token kind to the infix operator it spells, if any.
    ///
    /// ## Example
    /// ```
    /// use monkey::{ast::InfixOperator, interpreter::token::TokenKind};
    ///
    /// assert_eq!(InfixOperator::from_token(TokenKind::Asterisk), Some(InfixOperator::Mul));
    /// assert_eq!(InfixOperator::from_token(TokenKind::Bang), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Asterisk => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Lt => Some(Self::Less),
            TokenKind::Gt => Some(Self::Greater),
            TokenKind::Eq => Some(Self::Equal),
            TokenKind::NotEq => Some(Self::NotEqual),
            _ => None,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Less => "<",
                        Self::Greater => ">",
                        Self::Equal => "==",
                        Self::NotEqual => "!=",
                    })
    }
}

/// A name, either bound by `let` or referenced in an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `IDENT` token.
    pub token: Token,
    /// The identifier's name.
    pub value: String,
}

impl Identifier {
    /// Builds an identifier from its `IDENT` token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Every variant keeps the token it was parsed from so diagnostics can point
/// back at the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The `INT` token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// `true` or `false`.
    BooleanLiteral {
        /// The `TRUE` or `FALSE` token.
        token: Token,
        /// The literal's value.
        value: bool,
    },
    /// A unary operation such as `-x` or `!ok`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression with an optional `else` block.
    If {
        /// The `IF` token.
        token:       Token,
        /// The condition, judged by truthiness.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise.
        alternative: Option<BlockStatement>,
    },
}

impl Expression {
    /// The literal text of the token this expression was parsed from.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(identifier) => &identifier.token.literal,
            Self::IntegerLiteral { token, .. }
            | Self::BooleanLiteral { token, .. }
            | Self::Prefix { token, .. }
            | Self::Infix { token, .. }
            | Self::If { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral { token, .. } | Self::BooleanLiteral { token, .. } => {
                f.write_str(&token.literal)
            },
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
        }
    }
}

/// A `{ ... }` body: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{` token.
    pub token:      Token,
    /// Statements in evaluation order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| write!(f, "{statement}"))
    }
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `LET` token.
        token: Token,
        /// The name being bound.
        name:  Identifier,
        /// The bound expression. Absent only when its parse failed.
        value: Option<Expression>,
    },
    /// `return <value>;`, where the value may be omitted.
    Return {
        /// The `RETURN` token.
        token: Token,
        /// The returned expression.
        value: Option<Expression>,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The wrapped expression.
        expression: Expression,
    },
    /// A nested block of statements.
    Block(BlockStatement),
}

impl Statement {
    /// The literal text of the token this statement was parsed from.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let { token, .. } | Self::Return { token, .. } | Self::Expression { token, .. } => {
                &token.literal
            },
            Self::Block(block) => &block.token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { token, name, value } => {
                write!(f, "{} {name} = ", token.literal)?;
                if let Some(value) = value {
                    write!(f, "{value}")?;
                }
                f.write_str(";")
            },
            Self::Return { token, value } => {
                f.write_str(&token.literal)?;
                if let Some(value) = value {
                    write!(f, " {value}")?;
                }
                f.write_str(";")
            },
            Self::Expression { expression, .. } => write!(f, "{expression}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

/// The root of every syntax tree: the statements of one source input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in evaluation order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The token literal of the first statement, or `""` for an empty program.
    ///
    /// ## Example
    /// ```
    /// use monkey::parse;
    ///
    /// let program = parse("let x = 5;").unwrap();
    /// assert_eq!(program.token_literal(), "let");
    /// ```
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Statement::token_literal)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| write!(f, "{statement}"))
    }
}
