/// The token model shared by the lexer and the parser.
///
/// A token is a kind plus the literal text it was scanned from. The
/// [`TokenSource`](token::TokenSource) trait is the pull interface the parser
/// reads tokens through.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// integers, identifiers, operators, delimiters and keywords. Unrecognized
/// characters become `ILLEGAL` tokens rather than errors.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser: statements are dispatched on their first token and
/// expressions are built by precedence climbing over prefix and infix parse
/// function registries.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Resolves operator precedence and associativity.
/// - Collects syntax errors without stopping at the first one.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an environment. `return` and runtime
/// errors travel as ordinary values and cut short every enclosing block.
pub mod evaluator;
/// The runtime values produced by evaluation.
pub mod value;
/// Lexically scoped name bindings.
pub mod environment;
