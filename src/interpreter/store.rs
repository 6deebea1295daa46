/// The variable table.
///
/// Maps names to mutable numeric values. Entries are created by assignment
/// and live for the whole session.
pub mod variables;
/// The history buffer.
///
/// Keeps the most recent top-level results, indexed from the end.
pub mod history;
