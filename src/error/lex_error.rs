#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while lexing a line.
pub enum LexError {
    /// Found a character sequence that does not start any token.
    #[error("Error at column {column}: Unexpected input '{text}'.")]
    UnexpectedCharacter {
        /// The offending source text.
        text:   String,
        /// The 1-based column where the text starts.
        column: usize,
    },
    /// A numeric literal could not be represented.
    #[error("Error at column {column}: Literal '{text}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        text:   String,
        /// The 1-based column where the literal starts.
        column: usize,
    },
}
