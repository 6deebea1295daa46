/// Function registries.
///
/// Declares the unary and modifier function tables and the builtin entries
/// they are seeded with.
pub mod core;
/// Built-in unary functions.
///
/// Numeric transforms that take one operand, such as `sqrt` or `log`.
pub mod builtin;
/// Built-in modifier functions.
///
/// Zero-argument functions called for their effect on the session, such as
/// `quit` or `clear`.
pub mod modifier;
