/// Evaluation state and the entry point.
///
/// Declares the long-lived [`core::Context`], the per-expression
/// [`core::Evaluator`] and the lookahead protocol shared by every precedence
/// level.
pub mod core;

/// Additive, multiplicative and bitwise precedence levels.
///
/// Implements `expr`, `term` and `bit_term`, each folding its operators left
/// to right over the level below it.
pub mod binary;

/// The unary precedence level.
///
/// Applies prefix and postfix transforms (`~`, `#`, `^`, `!`, prefix `-`) to
/// primaries.
pub mod unary;

/// The primary level.
///
/// Numbers, names, parenthesized expressions and history references.
pub mod primary;
