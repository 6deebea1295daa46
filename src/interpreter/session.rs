use tracing::{debug, info};

use crate::{
    config::Config,
    error::{Error, EvalError},
    interpreter::{
        evaluator::core::{Context, Evaluation, Lookahead},
        lexer::tokenize,
        store::history::History,
        token::{Token, TokenSource, TokenStream},
    },
};

/// What happened to one statement of a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The statement produced a value to print.
    Value(f64),
    /// The statement succeeded but asked not to be echoed.
    Silent,
    /// The statement failed; the rest of the line was skipped.
    Failed(Error),
}

/// An interactive calculator session.
///
/// A session owns the [`Context`] that every line is evaluated against, so
/// variables and history carry over from one line to the next.
///
/// # Example
/// ```
/// use bincalc::{
///     config::Config,
///     interpreter::session::{Outcome, Session},
/// };
///
/// let mut session = Session::new(Config::default());
///
/// assert_eq!(session.run_line("x = 6; x * 7"),
///            vec![Outcome::Value(6.0), Outcome::Value(42.0)]);
/// assert_eq!(session.run_line("$1 + $2"), vec![Outcome::Value(48.0)]);
///
/// assert_eq!(session.run_line("quit"), vec![Outcome::Silent]);
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    context:  Context,
    config:   Config,
    finished: bool,
    failures: usize,
}

impl Session {
    /// Creates a session with a fresh context built from `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut context = Context::with_history(History::new(config.history_capacity));
        context.fraction_policy = config.fraction_policy;
        Self { context,
               config,
               finished: false,
               failures: 0 }
    }

    /// Returns the evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the evaluation context for registering functions or seeding
    /// variables.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Returns the session settings.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once a `quit` or `exit` has run.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the number of statements that have failed so far.
    ///
    /// A line that cannot be tokenized counts as one failure.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Renders a value with the session's output settings.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        self.config.format(value)
    }

    /// Evaluates every statement of a line.
    ///
    /// Statements are separated by `;`. Each successful statement appends its
    /// value to the history. The first failure ends the line; statements
    /// before it keep their effects. Requests raised by modifiers are applied
    /// once the line is done, whether or not it failed.
    pub fn run_line(&mut self, line: &str) -> Vec<Outcome> {
        debug!(line, "running line");

        let tokens = match tokenize(line) {
            Ok(tokens) => tokens,
            Err(error) => {
                self.failures += 1;
                return vec![Outcome::Failed(error.into())];
            },
        };
        let mut stream = TokenStream::new(tokens);
        let mut outcomes = Vec::new();

        loop {
            match stream.current() {
                Token::End => break,
                Token::Print => {
                    stream.get();
                    continue;
                },
                _ => {},
            }

            let outcome = self.run_statement(&mut stream);
            let failed = matches!(outcome, Outcome::Failed(_));
            outcomes.push(outcome);
            if failed {
                self.failures += 1;
                break;
            }
        }

        self.apply_requests();
        outcomes
    }

    /// Evaluates one statement with its first token current.
    fn run_statement(&mut self, stream: &mut TokenStream) -> Outcome {
        let Evaluation { result, suppress_print } =
            self.context.evaluate(stream, Lookahead::Positioned);

        let value = match result {
            Ok(value) => value,
            Err(error) => return Outcome::Failed(error.into()),
        };

        if !stream.current().ends_statement() {
            let found = stream.current().to_string();
            debug!(%found, "statement has trailing tokens");
            return Outcome::Failed(EvalError::TrailingToken { found }.into());
        }

        self.context.history.push(value);
        if suppress_print {
            Outcome::Silent
        } else {
            Outcome::Value(value)
        }
    }

    fn apply_requests(&mut self) {
        let requests = self.context.requests.take();
        if requests.clear {
            info!("clearing variables and history");
            self.context.reset();
        }
        if requests.quit {
            info!("session finished");
            self.finished = true;
        }
    }
}
