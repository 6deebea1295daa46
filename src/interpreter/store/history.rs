use std::collections::VecDeque;

/// Default number of results kept by a [`History`].
pub const DEFAULT_CAPACITY: usize = 64;

/// A bounded record of past results.
///
/// Results are appended by the session after each successful top-level
/// evaluation. Once full, the oldest result is dropped. The evaluator only
/// reads it, by offset counted back from the most recent result.
///
/// # Example
/// ```
/// use bincalc::interpreter::store::history::History;
///
/// let mut history = History::new(2);
/// history.push(10.0);
/// history.push(20.0);
/// history.push(30.0);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.recent(1), Some(30.0));
/// assert_eq!(history.recent(2), Some(20.0));
/// assert_eq!(history.recent(3), None);
/// assert_eq!(history.recent(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct History {
    entries:  VecDeque<f64>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Creates an empty history keeping at most `capacity` results.
    ///
    /// A capacity of zero disables the history.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { entries: VecDeque::new(),
               capacity }
    }

    /// Appends a result, dropping the oldest one when full.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(value);
    }

    /// Returns the result `offset` positions back, where `1` is the most
    /// recent one.
    #[must_use]
    pub fn recent(&self, offset: usize) -> Option<f64> {
        if offset == 0 || offset > self.entries.len() {
            return None;
        }
        self.entries.get(self.entries.len() - offset).copied()
    }

    /// Returns the number of stored results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no result is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every stored result.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
