use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use bincalc::{
    config::{Config, Radix},
    interpreter::{
        evaluator::core::FractionPolicy,
        session::{Outcome, Session},
        store::history::DEFAULT_CAPACITY,
    },
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// bincalc is an interactive calculator with bitwise integer operators,
/// variables and a history of results.
///
/// Without expressions or a file, it reads lines from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads expressions from this file, one statement per line.
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Number of results kept for `$n` references.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    history: usize,

    /// Decimal places printed for results.
    #[arg(short, long)]
    precision: Option<usize>,

    /// Base used to print results.
    #[arg(short, long, value_enum, default_value_t = Radix::Decimal)]
    radix: Radix,

    /// Keeps fractions that pass through the bitwise level without a bitwise
    /// operator instead of truncating them.
    #[arg(long)]
    preserve_fractions: bool,

    /// Logs evaluation steps to standard error. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Expressions to evaluate, each treated as one line.
    expressions: Vec<String>,
}

impl Args {
    fn config(&self) -> Config {
        Config { history_capacity: self.history,
                 precision:        self.precision,
                 radix:            self.radix,
                 fraction_policy:  if self.preserve_fractions {
                     FractionPolicy::Preserve
                 } else {
                     FractionPolicy::Truncate
                 }, }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                       EnvFilter::new(if verbose {
                                                                          "bincalc=debug"
                                                                      } else {
                                                                          "warn"
                                                                      })
                                                   });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Prints the outcomes of a line.
fn report(session: &Session, outcomes: Vec<Outcome>) {
    for outcome in outcomes {
        match outcome {
            Outcome::Value(value) => println!("{}", session.format(value)),
            Outcome::Silent => {},
            Outcome::Failed(e) => eprintln!("{e}"),
        }
    }
}

fn run_lines<I>(session: &mut Session, lines: I)
    where I: IntoIterator<Item = String>
{
    for line in lines {
        let outcomes = session.run_line(&line);
        report(session, outcomes);
        if session.is_finished() {
            break;
        }
    }
}

/// Reads lines from standard input until it ends or the session quits.
fn repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    while !session.is_finished() {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let outcomes = session.run_line(&line?);
        report(session, outcomes);
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = Session::new(args.config());

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                 eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                           path.display());
                                                 std::process::exit(1);
                                             });
        run_lines(&mut session, script.lines().map(str::to_string));
    } else if !args.expressions.is_empty() {
        run_lines(&mut session, args.expressions);
    } else if let Err(e) = repl(&mut session) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // Every input mode reports failed statements through the exit code.
    if session.failures() == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
