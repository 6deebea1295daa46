use std::f64::consts;

use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        function::{
            core::{ModifierTable, UnaryTable},
            modifier::Requests,
        },
        store::{history::History, variables::VariableTable},
        token::TokenSource,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing why the expression was aborted.
pub type EvalResult<T> = Result<T, EvalError>;

/// Names and values of the constants seeded into every new context.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// Tells a precedence level whether it must fetch a token before looking.
///
/// Every level takes one. The outermost caller decides for the first token;
/// after consuming an operator, a level calls the next one down with
/// [`Lookahead::Advance`] so the operand's first token is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    /// The caller has not advanced; fetch the next token first.
    Advance,
    /// The token to inspect is already current.
    Positioned,
}

/// How the bitwise level treats fractional operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FractionPolicy {
    /// Every value passing through the bitwise level is truncated toward
    /// zero, whether or not a bitwise operator follows it.
    #[default]
    Truncate,
    /// Values are truncated only when a bitwise operator is applied.
    Preserve,
}

/// Stores the state shared by every evaluation in a session.
///
/// `Context` is created once and handed by reference to each
/// [`Evaluator`]. Variables, history and the function registries persist
/// across lines; modifier requests are collected here until the session
/// applies them.
#[derive(Debug, Clone)]
pub struct Context {
    /// Named numeric variables.
    pub variables:       VariableTable,
    /// Value-returning functions of one operand.
    pub unary_functions: UnaryTable,
    /// Zero-argument functions called for their effect.
    pub modifiers:       ModifierTable,
    /// Results of previous top-level expressions.
    pub history:         History,
    /// Effects requested by modifiers and not yet applied.
    pub requests:        Requests,
    /// Fraction handling of the bitwise level.
    pub fraction_policy: FractionPolicy,
}

/// The outcome of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The value, or the error that aborted the expression.
    pub result:         EvalResult<f64>,
    /// Set when the result must not be echoed: a modifier ran or a name was
    /// not found.
    pub suppress_print: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the builtin functions, the constants in
    /// [`CONSTANTS`] and a history of default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(History::default())
    }

    /// Creates a context like [`Context::new`] around the given history.
    #[must_use]
    pub fn with_history(history: History) -> Self {
        let mut context = Self { variables: VariableTable::new(),
                                 unary_functions: UnaryTable::with_builtins(),
                                 modifiers: ModifierTable::with_builtins(),
                                 history,
                                 requests: Requests::default(),
                                 fraction_policy: FractionPolicy::default() };
        context.seed_constants();
        context
    }

    /// Creates a context with no functions, variables or constants.
    #[must_use]
    pub fn empty(history: History) -> Self {
        Self { variables: VariableTable::new(),
               unary_functions: UnaryTable::new(),
               modifiers: ModifierTable::new(),
               history,
               requests: Requests::default(),
               fraction_policy: FractionPolicy::default() }
    }

    /// Forgets all variables and history, then seeds the constants again.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.history.clear();
        self.seed_constants();
    }

    fn seed_constants(&mut self) {
        for (name, value) in CONSTANTS {
            self.variables.set(name, *value);
        }
    }

    /// Evaluates one expression read from `source`.
    ///
    /// `lookahead` says whether the first token of the expression is already
    /// current. On return, the token that ended the expression is current.
    ///
    /// # Example
    /// ```
    /// use bincalc::interpreter::{
    ///     evaluator::core::{Context, Lookahead},
    ///     lexer::tokenize,
    ///     token::TokenStream,
    /// };
    ///
    /// let mut context = Context::new();
    /// let mut stream = TokenStream::new(tokenize("2 + 3 * 4").unwrap());
    ///
    /// let evaluation = context.evaluate(&mut stream, Lookahead::Positioned);
    /// assert_eq!(evaluation.result, Ok(14.0));
    /// assert!(!evaluation.suppress_print);
    /// ```
    pub fn evaluate<S: TokenSource>(&mut self, source: &mut S, lookahead: Lookahead) -> Evaluation {
        let mut evaluator = Evaluator::new(source, self);
        let result = evaluator.evaluate(lookahead);
        Evaluation { result,
                     suppress_print: evaluator.suppress_print() }
    }
}

/// Evaluates expressions from a token source against a [`Context`].
///
/// The precedence levels are methods on this type: [`Evaluator::expr`],
/// `term`, `bit_term`, `unary_term` and `prim`. They consume tokens as they
/// go and compute values directly, without building a tree.
pub struct Evaluator<'a, S: TokenSource> {
    pub(super) source:         &'a mut S,
    pub(super) context:        &'a mut Context,
    pub(super) suppress_print: bool,
}

impl<'a, S: TokenSource> Evaluator<'a, S> {
    /// Creates an evaluator reading from `source`.
    pub fn new(source: &'a mut S, context: &'a mut Context) -> Self {
        Self { source,
               context,
               suppress_print: false }
    }

    /// Evaluates one full expression and clears the suppress-print flag
    /// beforehand.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] raised by any precedence level.
    pub fn evaluate(&mut self, lookahead: Lookahead) -> EvalResult<f64> {
        self.suppress_print = false;
        let result = self.expr(lookahead);
        match &result {
            Ok(value) => trace!(value, "expression evaluated"),
            Err(error) => debug!(%error, "expression aborted"),
        }
        result
    }

    /// Returns `true` if the last expression asked not to echo its result.
    #[must_use]
    pub const fn suppress_print(&self) -> bool {
        self.suppress_print
    }
}
