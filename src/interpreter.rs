/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces tokens on demand, each
/// carrying its kind, its exact lexeme and the line it starts on. It never
/// fails: anything it does not recognize becomes an unknown token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser turns the token stream into a list of
/// statements. The first grammar violation aborts the parse with an error
/// naming the line, the offending lexeme and what was expected.
pub mod parser;
/// The environment module holds variable state.
///
/// A stack of scopes maps names to values. Scopes are pushed and popped by
/// the evaluator as it enters and leaves blocks and `for` loops.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, floats, chars and strings, with truthiness, numeric promotion
/// and display formatting.
pub mod value;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks statements for their effects and expressions for
/// their values, reporting runtime errors such as division by zero or
/// undefined variables.
pub mod evaluator;
