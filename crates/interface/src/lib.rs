//! Identifiers and session-scoped globals shared by the type system.
//!
//! Source positions, multi-format diagnostics rendering, and a source map
//! have no caller once lexing, parsing, and diagnostic emission are out of
//! scope. What remains is the symbol interner and the thread-scoped globals
//! that make it reachable without a handle.

#[macro_use]
extern crate tracing;

mod globals;
pub use globals::SessionGlobals;

mod session;
pub use session::Session;

mod symbol;
pub use symbol::{Ident, Symbol};

pub use soltype_data_structures as data_structures;

/// Creates new session globals on the current thread if they don't exist already, then
/// executes the given closure.
#[inline]
pub fn enter<R>(f: impl FnOnce() -> R) -> R {
    SessionGlobals::with_or_default(|_| f())
}
