use crate::SessionGlobals;
use std::sync::Arc;

/// A compilation session.
///
/// Compiler options, a diagnostics context, and a parallel job pool are all
/// tied to passes this core doesn't run. What's left is the one thing the
/// type system actually needs: a place to hang the symbol interner's globals
/// for the session's lifetime.
pub struct Session {
    globals: Arc<SessionGlobals>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new session with fresh globals.
    pub fn new() -> Self {
        Self { globals: Arc::new(SessionGlobals::new()) }
    }

    /// Enters the session, making its globals available to `Symbol::intern` and friends for the
    /// duration of `f`.
    pub fn enter<R>(&self, f: impl FnOnce() -> R) -> R {
        self.globals.set(f)
    }
}
