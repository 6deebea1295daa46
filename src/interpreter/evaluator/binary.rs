use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, FractionPolicy, Lookahead},
        token::{Token, TokenSource},
    },
    util::num::{remainder, shift_left, shift_right, truncate},
};

impl<S: TokenSource> Evaluator<'_, S> {
    /// Evaluates addition and subtraction.
    ///
    /// Left-associative: `1 - 2 - 3` is `-4`. The token that ends the
    /// expression is left current for the caller.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates any error from the levels below.
    pub fn expr(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        let mut left = self.term(lookahead)?;

        loop {
            match self.source.current() {
                Token::Plus => left += self.term(Lookahead::Advance)?,
                Token::Minus => left -= self.term(Lookahead::Advance)?,
                _ => return Ok(left),
            }
        }
    }

    /// Evaluates multiplication, division and integer remainder.
    ///
    /// `%` truncates both operands to integers first, so `7.9 % 4` is `3`.
    ///
    /// Grammar: `term := bit_term (("*" | "/" | "%") bit_term)*`
    ///
    /// # Errors
    /// - `DivideByZero` when the divisor of `/` is zero.
    /// - `ModuloByZero` when the truncated divisor of `%` is zero.
    pub(super) fn term(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        let mut left = self.bit_term(lookahead)?;

        loop {
            match self.source.current() {
                Token::Mul => left *= self.bit_term(Lookahead::Advance)?,
                Token::Div => {
                    let divisor = self.bit_term(Lookahead::Advance)?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivideByZero);
                    }
                    left /= divisor;
                },
                Token::Mod => {
                    let base = truncate(self.bit_term(Lookahead::Advance)?);
                    let rem = remainder(truncate(left), base).ok_or(EvalError::ModuloByZero)?;
                    left = f64::from(rem);
                },
                _ => return Ok(left),
            }
        }
    }

    /// Evaluates shifts and bitwise `&`, `|` and `xor`.
    ///
    /// Operands are truncated to 32-bit integers and shifts are logical.
    /// This level binds tighter than `+` and `*`, so `1 + 2 << 1` is `5`.
    ///
    /// Under [`FractionPolicy::Truncate`] the value coming up from the unary
    /// level is truncated even when no bitwise operator follows it.
    ///
    /// Grammar: `bit_term := unary_term (("<<" | ">>" | "&" | "|" | "xor")
    /// unary_term)*`
    pub(super) fn bit_term(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        let mut left = self.unary_term(lookahead)?;
        let mut left_int = truncate(left);
        if self.context.fraction_policy == FractionPolicy::Truncate {
            left = f64::from(left_int);
        }

        loop {
            let op: fn(i32, i32) -> i32 = match self.source.current() {
                Token::LShift => shift_left,
                Token::RShift => shift_right,
                Token::BitAnd => |a, b| a & b,
                Token::BitOr => |a, b| a | b,
                Token::BitXor => |a, b| a ^ b,
                _ => return Ok(left),
            };
            let right = truncate(self.unary_term(Lookahead::Advance)?);
            left_int = op(left_int, right);
            left = f64::from(left_int);
        }
    }
}
