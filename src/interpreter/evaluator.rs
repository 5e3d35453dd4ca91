/// Core evaluation logic.
///
/// Defines the [`Eval`](core::Eval) trait and walks programs, blocks,
/// statements and expressions, propagating `return` values and errors.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements logical `!` and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparison, identity equality for the
/// shared boolean and null values, and the type errors for everything else.
pub mod binary;
