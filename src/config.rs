use crate::{
    interpreter::{evaluator::core::FractionPolicy, store::history::DEFAULT_CAPACITY},
    util::num::truncate,
};

/// Base used to print results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Radix {
    /// Plain decimal, honoring the configured precision.
    #[default]
    Decimal,
    /// The 32-bit integer view in hexadecimal, such as `0xff`.
    Hex,
    /// The 32-bit integer view in octal, such as `0o17`.
    Octal,
    /// The 32-bit integer view in binary, such as `0b101`.
    Binary,
}

/// Settings of a calculator session.
///
/// # Example
/// ```
/// use bincalc::config::{Config, Radix};
///
/// let config = Config { precision: Some(2),
///                       ..Config::default() };
/// assert_eq!(config.format(1.0 / 3.0), "0.33");
///
/// let config = Config { radix: Radix::Hex,
///                       ..Config::default() };
/// assert_eq!(config.format(255.0), "0xff");
/// assert_eq!(config.format(-1.0), "0xffffffff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of results kept for `$n` references.
    pub history_capacity: usize,
    /// Decimal places printed for results, or `None` for the shortest exact
    /// form.
    pub precision:        Option<usize>,
    /// Base used to print results.
    pub radix:            Radix,
    /// Fraction handling of the bitwise level.
    pub fraction_policy:  FractionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self { history_capacity: DEFAULT_CAPACITY,
               precision:        None,
               radix:            Radix::default(),
               fraction_policy:  FractionPolicy::default(), }
    }
}

impl Config {
    /// Renders a result for display.
    ///
    /// A decimal precision pads integral values too, so `3` prints as `3.00`
    /// at precision 2.
    ///
    /// Non-decimal radixes print the truncated 32-bit integer view, so
    /// negative values show their two's complement bits. Infinities and
    /// `NaN` always print in decimal.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        match self.radix {
            Radix::Decimal => match self.precision {
                Some(precision) => format!("{value:.precision$}"),
                None => value.to_string(),
            },
            Radix::Hex => format!("{:#x}", truncate(value)),
            Radix::Octal => format!("{:#o}", truncate(value)),
            Radix::Binary => format!("{:#b}", truncate(value)),
        }
    }
}
