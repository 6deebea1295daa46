use std::fmt;

/// A token as seen by the evaluator.
///
/// Only [`Token::Number`] carries a numeric payload, only [`Token::Name`]
/// carries a string and [`Token::Last`] carries a history offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),
    /// A variable or function name.
    Name(String),
    /// Binary `+`.
    Plus,
    /// Binary `-`.
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, integer remainder.
    Mod,
    /// `<<`, logical left shift.
    LShift,
    /// `>>`, logical right shift.
    RShift,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `xor`
    BitXor,
    /// `~`, bitwise complement of the next primary.
    BitNot,
    /// Prefix `-`, negates the next primary.
    MagNeg,
    /// `^` or `**`
    Pow,
    /// Postfix `!`
    Fact,
    /// `#`, marks the next primary as a literal.
    Lit,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Assign,
    /// A history reference, counted back from the most recent result.
    Last(usize),
    /// A statement separator (`;` or a line break).
    Print,
    /// End of input. Reached again on every further advance.
    End,
}

impl Token {
    /// Returns `true` for tokens after which a `-` is a binary minus.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Name(_) | Self::RParen | Self::Fact | Self::Last(_))
    }

    /// Returns `true` for tokens that end a statement.
    #[must_use]
    pub const fn ends_statement(&self) -> bool {
        matches!(self, Self::Print | Self::End)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "number {v}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus | Self::MagNeg => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Mod => write!(f, "'%'"),
            Self::LShift => write!(f, "'<<'"),
            Self::RShift => write!(f, "'>>'"),
            Self::BitAnd => write!(f, "'&'"),
            Self::BitOr => write!(f, "'|'"),
            Self::BitXor => write!(f, "'xor'"),
            Self::BitNot => write!(f, "'~'"),
            Self::Pow => write!(f, "'^'"),
            Self::Fact => write!(f, "'!'"),
            Self::Lit => write!(f, "'#'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Assign => write!(f, "'='"),
            Self::Last(offset) => write!(f, "'${offset}'"),
            Self::Print => write!(f, "end of statement"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A source of tokens with one token of lookahead.
///
/// The evaluator only ever inspects [`TokenSource::current`] and moves
/// forward with [`TokenSource::get`]. Implementations must keep returning
/// [`Token::End`] once the input is exhausted.
pub trait TokenSource {
    /// Returns the current token without consuming it.
    fn current(&self) -> &Token;

    /// Advances to the next token and returns it.
    fn get(&mut self) -> &Token;
}

/// A [`TokenSource`] over an already lexed line.
///
/// The stream starts positioned on the first token.
///
/// # Example
/// ```
/// use bincalc::interpreter::token::{Token, TokenSource, TokenStream};
///
/// let mut stream = TokenStream::new(vec![Token::Number(1.0)]);
/// assert_eq!(stream.current(), &Token::Number(1.0));
/// assert_eq!(stream.get(), &Token::End);
/// assert_eq!(stream.get(), &Token::End);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Creates a stream over `tokens`, appending [`Token::End`] if missing.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::End) {
            tokens.push(Token::End);
        }
        Self { tokens,
               position: 0 }
    }
}

impl TokenSource for TokenStream {
    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn get(&mut self) -> &Token {
        if !matches!(self.tokens[self.position], Token::End) {
            self.position += 1;
        }
        &self.tokens[self.position]
    }
}
