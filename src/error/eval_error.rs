#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that abort the evaluation of an expression.
///
/// An error only ends the expression it occurred in. Side effects applied
/// before it (assignments, modifier requests) are kept.
pub enum EvalError {
    /// The right operand of `/` evaluated to zero.
    #[error("Error: Divide by zero.")]
    DivideByZero,
    /// The integer right operand of `%` evaluated to zero.
    #[error("Error: Modulo by zero.")]
    ModuloByZero,
    /// A parenthesized expression was not closed.
    #[error("Error: Expected closing parenthesis ')' but found {found}.")]
    UnterminatedParenthesis {
        /// The token found instead of `)`.
        found: String,
    },
    /// A name that is neither a function nor an assigned variable.
    #[error("Error: Unknown variable '{name}'.")]
    UndefinedName {
        /// The name that was looked up.
        name: String,
    },
    /// A history reference reached further back than the stored results.
    #[error("Error: History offset {offset} looks past the {len} stored result(s).")]
    HistoryOutOfRange {
        /// The requested offset, counted back from the most recent result.
        offset: usize,
        /// The number of results currently stored.
        len:    usize,
    },
    /// A primary expression was expected but some other token was found.
    #[error("Error: Primary expected, found {found}.")]
    UnexpectedToken {
        /// The token found instead.
        found: String,
    },
    /// An expression ended before the end of its statement.
    #[error("Error: Unexpected {found} after expression.")]
    TrailingToken {
        /// The first token left over.
        found: String,
    },
}
