use logos::Logos;
use tracing::trace;

use crate::{error::LexError, interpreter::token::Token};

/// Represents a raw lexeme in a line of input.
///
/// Lexemes are what the character scanner recognizes. [`tokenize`] turns
/// them into evaluator [`Token`]s, deciding from context whether a `-` is a
/// binary minus or a prefix negation.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// Decimal literals, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_decimal)]
    Decimal(f64),
    /// Radix literals: `0x1f`, `0o17` or `0b101`.
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_radix(lex, 16))]
    #[regex(r"0[oO][0-7]+", |lex| parse_radix(lex, 8))]
    #[regex(r"0[bB][01]+", |lex| parse_radix(lex, 2))]
    Radix(f64),
    /// History references: `$` (the most recent result) or `$n`.
    #[regex(r"\$[0-9]*", parse_history)]
    History(usize),
    /// `xor`
    #[token("xor")]
    Xor,
    /// Identifier lexemes; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    StarStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<<`
    #[token("<<")]
    LessLess,
    /// `>>`
    #[token(">>")]
    GreaterGreater,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `#`
    #[token("#")]
    Hash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `;` and line breaks end a statement.
    #[token(";")]
    #[token("\n")]
    Separator,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Parses a decimal literal from the current slice.
fn parse_decimal(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a prefixed radix literal from the current slice.
///
/// Literals wider than 64 bits are rejected.
#[allow(clippy::cast_precision_loss)]
fn parse_radix(lex: &logos::Lexer<Lexeme>, radix: u32) -> Option<f64> {
    u64::from_str_radix(&lex.slice()[2..], radix).ok()
                                                 .map(|v| v as f64)
}

/// Parses a history reference; a bare `$` refers to the latest result.
fn parse_history(lex: &logos::Lexer<Lexeme>) -> Option<usize> {
    match &lex.slice()[1..] {
        "" => Some(1),
        digits => digits.parse().ok(),
    }
}

/// Converts a line of source text into evaluator tokens.
///
/// The returned vector always ends with [`Token::End`].
///
/// A `-` becomes [`Token::Minus`] when it follows an operand (a number, a
/// name, a closing parenthesis, a factorial or a history reference) and
/// [`Token::MagNeg`] everywhere else, so `3 - -2` reads as three minus the
/// negation of two.
///
/// # Errors
/// Returns a [`LexError`] for characters that start no token and for radix
/// or history literals that do not fit.
///
/// # Example
/// ```
/// use bincalc::interpreter::{lexer::tokenize, token::Token};
///
/// let tokens = tokenize("-x - 0x10").unwrap();
/// assert_eq!(tokens,
///            vec![Token::MagNeg,
///                 Token::Name("x".to_string()),
///                 Token::Minus,
///                 Token::Number(16.0),
///                 Token::End]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let column = lexer.span().start + 1;
        let Ok(lexeme) = lexeme else {
            let text = lexer.slice().to_string();
            return Err(if text.starts_with('$') || text.starts_with('0') {
                           LexError::LiteralTooLarge { text, column }
                       } else {
                           LexError::UnexpectedCharacter { text, column }
                       });
        };

        let token = match lexeme {
            Lexeme::Decimal(v) | Lexeme::Radix(v) => Token::Number(v),
            Lexeme::History(offset) => Token::Last(offset),
            Lexeme::Identifier(name) => Token::Name(name),
            Lexeme::Xor => Token::BitXor,
            Lexeme::Plus => Token::Plus,
            Lexeme::Minus => {
                if tokens.last().is_some_and(Token::ends_operand) {
                    Token::Minus
                } else {
                    Token::MagNeg
                }
            },
            Lexeme::StarStar | Lexeme::Caret => Token::Pow,
            Lexeme::Star => Token::Mul,
            Lexeme::Slash => Token::Div,
            Lexeme::Percent => Token::Mod,
            Lexeme::LessLess => Token::LShift,
            Lexeme::GreaterGreater => Token::RShift,
            Lexeme::Ampersand => Token::BitAnd,
            Lexeme::Pipe => Token::BitOr,
            Lexeme::Tilde => Token::BitNot,
            Lexeme::Bang => Token::Fact,
            Lexeme::Hash => Token::Lit,
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
            Lexeme::Equals => Token::Assign,
            Lexeme::Separator => Token::Print,
            Lexeme::Comment | Lexeme::Ignored => continue,
        };
        tokens.push(token);
    }

    tokens.push(Token::End);
    trace!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}
