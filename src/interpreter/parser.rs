/// The parser state and the precedence-climbing expression loop.
///
/// Holds the two-token window, the prefix and infix registries, and the
/// accumulated diagnostics.
pub mod core;

/// Infix operator parsing.
///
/// Defines the precedence table and parses binary operations.
pub mod binary;

/// Prefix expression parsing.
///
/// Identifiers, literals, unary operators, grouping parentheses and `if`
/// expressions: every form that can start an expression.
pub mod unary;

/// Block parsing.
///
/// Parses `{ ... }` bodies used by `if` expressions.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the first token of a statement to `let`, `return` or an
/// expression statement.
pub mod statement;

/// Helpers for moving through the token window and reporting mismatches.
pub mod utils;
