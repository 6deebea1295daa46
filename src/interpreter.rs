/// The evaluator module computes values directly from tokens.
///
/// Five mutually recursive precedence levels (`expr`, `term`, `bit_term`,
/// `unary_term`, `prim`) read tokens from a [`token::TokenSource`] and fold
/// operators as they meet them. No syntax tree is built.
///
/// # Responsibilities
/// - Implements operator precedence and associativity.
/// - Resolves names against functions, modifiers and variables.
/// - Reports evaluation errors such as division by zero or unknown names.
pub mod evaluator;
/// Built-in functions and their registries.
///
/// # Responsibilities
/// - Declares the unary and modifier function signatures.
/// - Seeds registries with the builtin math functions and session modifiers.
pub mod function;
/// The lexer module tokenizes a line of input.
///
/// # Responsibilities
/// - Recognizes numbers (decimal and radix-prefixed), names, operators and
///   history references.
/// - Tells binary minus from prefix negation by context.
/// - Reports lexical errors with their column.
pub mod lexer;
/// The session module drives evaluation line by line.
///
/// # Responsibilities
/// - Splits a line into statements and evaluates each one.
/// - Appends results to the history and honors print suppression.
/// - Applies modifier requests such as `quit` and `clear`.
pub mod session;
/// Session-wide storage: variables and result history.
pub mod store;
/// Tokens and the token source contract consumed by the evaluator.
pub mod token;
