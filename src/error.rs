/// Parsing errors.
///
/// Defines the diagnostics the parser records for malformed input, and the
/// [`ParseErrors`] collection handed to callers when an input cannot be
/// evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures evaluation can run into, such as type mismatches,
/// unknown operators, unbound identifiers and division by zero. They travel
/// through the evaluator as error values rather than `Err`s.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
