/// Requests raised by modifier functions during a line.
///
/// Modifiers cannot reach the session directly while an expression is being
/// evaluated, so they record what they want here. The session applies the
/// requests once the line is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requests {
    /// End the session after the current line.
    pub quit:  bool,
    /// Drop all variables and history after the current line.
    pub clear: bool,
}

impl Requests {
    /// Returns the pending requests and resets them.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Ends the session.
pub fn quit(requests: &mut Requests) {
    requests.quit = true;
}

/// Forgets every variable and stored result.
pub fn clear(requests: &mut Requests) {
    requests.clear = true;
}
