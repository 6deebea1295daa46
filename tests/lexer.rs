use bincalc::{
    error::LexError,
    interpreter::{lexer::tokenize, token::Token},
};

fn assert_tokens(src: &str, expected: &[Token]) {
    let mut expected = expected.to_vec();
    expected.push(Token::End);
    assert_eq!(tokenize(src), Ok(expected), "tokenizing `{src}`");
}

fn name(text: &str) -> Token {
    Token::Name(text.to_string())
}

#[test]
fn numbers() {
    assert_tokens("42", &[Token::Number(42.0)]);
    assert_tokens("3.25", &[Token::Number(3.25)]);
    assert_tokens(".5", &[Token::Number(0.5)]);
    assert_tokens("2e3", &[Token::Number(2000.0)]);
    assert_tokens("1.5E-1", &[Token::Number(0.15)]);
}

#[test]
fn radix_literals() {
    assert_tokens("0x1F", &[Token::Number(31.0)]);
    assert_tokens("0o17", &[Token::Number(15.0)]);
    assert_tokens("0b101", &[Token::Number(5.0)]);
    assert_tokens("0xffffffff", &[Token::Number(4_294_967_295.0)]);
}

#[test]
fn names_and_keywords() {
    assert_tokens("x_1 sqrt", &[name("x_1"), name("sqrt")]);
    assert_tokens("a xor b", &[name("a"), Token::BitXor, name("b")]);
    assert_tokens("xored", &[name("xored")]);
}

#[test]
fn operators() {
    assert_tokens("+ * / % << >> & | ~ ! # ( ) =",
                  &[Token::Plus,
                    Token::Mul,
                    Token::Div,
                    Token::Mod,
                    Token::LShift,
                    Token::RShift,
                    Token::BitAnd,
                    Token::BitOr,
                    Token::BitNot,
                    Token::Fact,
                    Token::Lit,
                    Token::LParen,
                    Token::RParen,
                    Token::Assign]);
    assert_tokens("2 ^ 3 ** 4",
                  &[Token::Number(2.0),
                    Token::Pow,
                    Token::Number(3.0),
                    Token::Pow,
                    Token::Number(4.0)]);
}

#[test]
fn minus_depends_on_what_precedes_it() {
    assert_tokens("-1", &[Token::MagNeg, Token::Number(1.0)]);
    assert_tokens("3 - -2",
                  &[Token::Number(3.0), Token::Minus, Token::MagNeg, Token::Number(2.0)]);
    assert_tokens("(1) - x",
                  &[Token::LParen, Token::Number(1.0), Token::RParen, Token::Minus, name("x")]);
    assert_tokens("3! - $",
                  &[Token::Number(3.0), Token::Fact, Token::Minus, Token::Last(1)]);
    assert_tokens("2 * -3",
                  &[Token::Number(2.0), Token::Mul, Token::MagNeg, Token::Number(3.0)]);
    assert_tokens("1; -1",
                  &[Token::Number(1.0), Token::Print, Token::MagNeg, Token::Number(1.0)]);
}

#[test]
fn history_references() {
    assert_tokens("$", &[Token::Last(1)]);
    assert_tokens("$3", &[Token::Last(3)]);
    assert_tokens("$0", &[Token::Last(0)]);
}

#[test]
fn separators_and_comments() {
    assert_tokens("1;2\n3",
                  &[Token::Number(1.0),
                    Token::Print,
                    Token::Number(2.0),
                    Token::Print,
                    Token::Number(3.0)]);
    assert_tokens("1 // the rest is ignored ; 2", &[Token::Number(1.0)]);
    assert_tokens("", &[]);
    assert_tokens(" \t ", &[]);
}

#[test]
fn unexpected_character() {
    assert_eq!(tokenize("1 + @"),
               Err(LexError::UnexpectedCharacter { text:   "@".to_string(),
                                                   column: 5, }));
}

#[test]
fn oversized_literals() {
    assert!(matches!(tokenize("0x1ffffffffffffffff"),
                     Err(LexError::LiteralTooLarge { column: 1, .. })));
    assert!(matches!(tokenize("2 + $99999999999999999999999"),
                     Err(LexError::LiteralTooLarge { column: 5, .. })));
}
