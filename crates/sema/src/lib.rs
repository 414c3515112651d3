//! Type system and type interner for a contract-oriented language targeting a
//! stack-based virtual machine.
//!
//! Two components, built bottom-up:
//!
//! - [`ty`]: the interner. Owns every [`ty::Ty`] value, pre-populates the atoms
//!   (booleans, address variants, fixed-width integers, fixed-byte arrays, ...),
//!   and exposes a factory surface that canonicalizes structural and nominal
//!   types so pointer equality implies type equality.
//! - [`global`]: a small container that uses the interner to build the
//!   built-in declaration list (`block`, `msg`, `require`, `keccak256`, ...)
//!   and lazily materializes `this`/`super` for whichever contract is
//!   currently being analyzed.
//!
//! Lexing, parsing, name resolution, expression type checking, and code
//! generation are out of scope: this crate only constructs and identifies
//! types and publishes the declarations that reference them. The AST
//! collaborators those passes would own are represented here as opaque
//! identities; see [`hir`].

#[macro_use]
extern crate tracing;

pub use bumpalo;
pub use soltype_ast as ast;
pub use soltype_interface as interface;

pub mod global;
pub mod hir;
pub mod ty;

pub use global::{Declaration, GlobalContext};
pub use ty::{enter, InvalidTypeRequest, Ty, TypeInterner};
