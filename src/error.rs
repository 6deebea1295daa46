/// Lexing errors.
///
/// Raised while turning a line of input into tokens, before any evaluation
/// takes place.
pub mod lex_error;
/// Evaluation errors.
///
/// Every error the precedence levels can abort an expression with, plus the
/// trailing-token check performed by the session driver.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

/// Any error a session can report for a line of input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// An expression on the line failed to evaluate.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
