/// Integer views of the calculator's floating-point values.
///
/// The bitwise and modulo operators work on a truncated 32-bit mirror of the
/// running value. This module collects those conversions and the shift and
/// remainder helpers so their overflow behavior is defined in one place.
pub mod num;
