//! Shared type-name primitives: data locations, state mutability, and the
//! bit-width newtypes used by elementary types.
//!
//! Everything else an AST node would normally carry — expressions,
//! statements, item declarations, token streams, visitors — belongs to the
//! lexer/parser/resolver layer and is out of scope here; those collaborators
//! are represented downstream as opaque identities (see `soltype-sema::hir`).

mod location;
mod size;

pub use location::{DataLocation, StateMutability};
pub use size::{TypeFixedSize, TypeSize};
