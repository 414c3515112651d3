scoped_tls::scoped_thread_local!(static SESSION_GLOBALS: SessionGlobals);

/// Per-session global variables.
///
/// Stored in thread-local storage so it is reachable without threading a
/// handle through every call, but not reachable outside the session. Used by
/// [`Symbol::intern`](crate::Symbol::intern), which otherwise would need a
/// reference to the active interner at every call site.
pub struct SessionGlobals {
    pub(crate) symbol_interner: crate::symbol::Interner,
}

impl Default for SessionGlobals {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGlobals {
    /// Creates a new session globals object.
    pub fn new() -> Self {
        Self { symbol_interner: crate::symbol::Interner::fresh() }
    }

    /// Sets this instance as the global instance for the duration of the closure.
    #[inline]
    #[track_caller]
    pub fn set<R>(&self, f: impl FnOnce() -> R) -> R {
        if cfg!(debug_assertions) && SESSION_GLOBALS.is_set() {
            panic!(
                "SESSION_GLOBALS should never be overwritten; this usually means nested \
                 `Session`s were entered, which is not supported"
            );
        }
        SESSION_GLOBALS.set(self, f)
    }

    /// Calls the given closure with the current session globals.
    ///
    /// # Panics
    ///
    /// Panics if `set` has not previously been called.
    #[inline]
    #[track_caller]
    pub fn with<R>(f: impl FnOnce(&Self) -> R) -> R {
        if !SESSION_GLOBALS.is_set() {
            panic!(
                "cannot access a scoped thread local variable without calling `set` first; \
                 did you forget to call `Session::enter`?"
            );
        }
        SESSION_GLOBALS.with(f)
    }

    /// Calls the given closure with the current session globals if they have been set, otherwise
    /// creates a new instance, sets it, and calls the closure with it.
    #[inline]
    #[track_caller]
    pub fn with_or_default<R>(f: impl FnOnce(&Self) -> R) -> R {
        if Self::is_set() { Self::with(f) } else { Self::default().set(|| Self::with(f)) }
    }

    /// Returns `true` if the session globals have been set.
    #[inline]
    pub fn is_set() -> bool {
        SESSION_GLOBALS.is_set()
    }
}
