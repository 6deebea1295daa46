use crate::{
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Lookahead},
        token::{Token, TokenSource},
    },
    util::num::{factorial, truncate},
};

/// Progress of the unary level through its operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnaryState {
    /// Looking for another unary operator.
    Scanning,
    /// No further operator applies.
    Done,
}

impl<S: TokenSource> Evaluator<'_, S> {
    /// Applies unary operators to a primary.
    ///
    /// Each step applies one operator to the running value:
    /// - `~p`: bitwise complement of the truncated primary `p`.
    /// - `#p`: the value becomes `p`, marking it as a literal.
    /// - `^p`: the value is raised to the power `p`.
    /// - `-p`: the value becomes the negation of `p` alone.
    /// - `!`: factorial of the value, then the level is done.
    ///
    /// A leading prefix operator works because the primary level yields `0`
    /// for it without consuming it, so `-5` is `0` followed by `-5`.
    ///
    /// The factorial multiplies the value by each integer from `n - 1` down
    /// to `2`, where `n` is the truncated first primary (or the result of
    /// `~`). Operands of `2` or less are returned unchanged, so `0!` is `0`.
    ///
    /// # Errors
    /// Propagates any error from the primary level.
    pub(super) fn unary_term(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        let mut left = self.prim(lookahead)?;
        let mut left_int = truncate(left);
        let mut state = UnaryState::Scanning;

        while state == UnaryState::Scanning {
            match self.source.current() {
                Token::BitNot => {
                    left_int = !truncate(self.prim(Lookahead::Advance)?);
                    left = f64::from(left_int);
                },
                Token::Lit => left = self.prim(Lookahead::Advance)?,
                Token::Pow => left = left.powf(self.prim(Lookahead::Advance)?),
                Token::MagNeg => left = -self.prim(Lookahead::Advance)?,
                Token::Fact => {
                    // No primary was read, so step past the `!` here.
                    left = factorial(left, left_int);
                    self.source.get();
                    state = UnaryState::Done;
                },
                _ => state = UnaryState::Done,
            }
        }

        Ok(left)
    }
}
