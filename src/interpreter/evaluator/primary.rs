use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Lookahead},
        token::{Token, TokenSource},
    },
};

impl<S: TokenSource> Evaluator<'_, S> {
    /// Evaluates a primary.
    ///
    /// Supported forms:
    /// - a number;
    /// - a name (function call, modifier call, assignment or variable);
    /// - `( expr )`;
    /// - a history reference `$n`;
    /// - a prefix operator (`#`, `~`, `-`, `^`), which yields `0` and is left
    ///   current for the unary level to apply.
    ///
    /// A stray `!` reads as the number `0`.
    ///
    /// # Errors
    /// - `UnterminatedParenthesis` when `)` is missing.
    /// - `UndefinedName` for an unassigned variable.
    /// - `HistoryOutOfRange` for an offset past the stored results.
    /// - `UnexpectedToken` for anything else.
    pub(super) fn prim(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        if lookahead == Lookahead::Advance {
            self.source.get();
        }
        trace!(token = %self.source.current(), "primary");

        match self.source.current() {
            Token::Number(value) => {
                let value = *value;
                self.source.get();
                Ok(value)
            },
            Token::Fact => {
                self.source.get();
                Ok(0.0)
            },
            Token::Name(name) => {
                let name = name.clone();
                self.resolve_name(&name)
            },
            Token::LParen => self.parenthesized(),
            Token::Lit | Token::BitNot | Token::MagNeg | Token::Pow => Ok(0.0),
            Token::Last(offset) => {
                let offset = *offset;
                self.recall(offset)
            },
            other => Err(EvalError::UnexpectedToken { found: other.to_string() }),
        }
    }

    /// Resolves a name with the name token still current.
    ///
    /// Functions are checked first, then modifiers, then variables, so a
    /// function name always hides a variable of the same name.
    fn resolve_name(&mut self, name: &str) -> EvalResult<f64> {
        if let Some(func) = self.context.unary_functions.get(name) {
            debug!(name, "unary function call");
            let argument = self.prim(Lookahead::Advance)?;
            return Ok(func(argument));
        }

        if let Some(modifier) = self.context.modifiers.get(name) {
            debug!(name, "modifier call");
            modifier(&mut self.context.requests);
            self.source.get();
            self.suppress_print = true;
            return Ok(0.0);
        }

        if matches!(self.source.get(), Token::Assign) {
            // The slot exists before the right-hand side runs, so `x = x + 1`
            // reads a fresh `x` as 0.
            let slot = self.context.variables.slot(name);
            let value = self.expr(Lookahead::Advance)?;
            trace!(name, value, "assignment");
            return Ok(self.context.variables.store(slot, value));
        }

        if let Some(value) = self.context.variables.get(name) {
            trace!(name, value, "lookup");
            return Ok(value);
        }

        self.suppress_print = true;
        Err(EvalError::UndefinedName { name: name.to_string() })
    }

    /// Evaluates `( expr )` with the `(` current.
    fn parenthesized(&mut self) -> EvalResult<f64> {
        let value = self.expr(Lookahead::Advance)?;
        match self.source.current() {
            Token::RParen => {
                self.source.get();
                Ok(value)
            },
            other => Err(EvalError::UnterminatedParenthesis { found: other.to_string() }),
        }
    }

    /// Reads the stored result `offset` positions back, with the reference
    /// current.
    fn recall(&mut self, offset: usize) -> EvalResult<f64> {
        let Some(value) = self.context.history.recent(offset) else {
            return Err(EvalError::HistoryOutOfRange { offset,
                                                      len: self.context.history.len() });
        };
        self.source.get();
        Ok(value)
    }
}
