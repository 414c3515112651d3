//! The global context: the built-in declaration list and the per-contract `this`/`super`.
//!
//! Constructed once per compilation from a [`TypeInterner`], which it uses to build every
//! built-in's type. Everything it publishes after construction is read-only.

use crate::hir;
use crate::ty::TypeInterner;
use soltype_ast::StateMutability;
use soltype_data_structures::map::FxHashMap;
use soltype_interface::Symbol;
use std::cell::{Cell, RefCell};

use crate::ty::{FunctionKind, MagicKind, Ty};

/// A name bound to a type: a built-in, or a per-contract `this`/`super`.
#[derive(Clone, Copy, Debug)]
pub struct Declaration<'gcx> {
    pub name: Symbol,
    pub ty: Ty<'gcx>,
}

pub struct GlobalContext<'gcx> {
    interner: &'gcx TypeInterner<'gcx>,
    declarations: Vec<Declaration<'gcx>>,

    current_contract: Cell<Option<hir::ContractId>>,
    this_cache: RefCell<FxHashMap<hir::ContractId, Declaration<'gcx>>>,
    super_cache: RefCell<FxHashMap<hir::ContractId, Declaration<'gcx>>>,
}

impl<'gcx> GlobalContext<'gcx> {
    /// Builds the built-in declaration list from `interner`. Must be called with an active
    /// session: every name below is interned via [`Symbol::intern`].
    pub fn new(interner: &'gcx TypeInterner<'gcx>) -> Self {
        Self {
            interner,
            declarations: builtins(interner),
            current_contract: Cell::new(None),
            this_cache: RefCell::new(FxHashMap::default()),
            super_cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// The built-in declaration list, in construction order. Contains the `require`/`revert`
    /// overloads twice, by design — name resolution disambiguates by argument shape.
    pub fn declarations(&self) -> &[Declaration<'gcx>] {
        &self.declarations
    }

    pub fn set_current_contract(&self, id: hir::ContractId) {
        self.current_contract.set(Some(id));
    }

    /// The `this` declaration for the active contract. The first call per contract allocates;
    /// later calls return the memoized declaration.
    ///
    /// # Panics
    ///
    /// Panics if no contract is active — calling this without [`set_current_contract`] first is
    /// a programmer error, not a user-facing failure.
    pub fn current_this(&self) -> Declaration<'gcx> {
        let id = self.active_contract();
        if let Some(decl) = self.this_cache.borrow().get(&id) {
            return *decl;
        }
        let decl = Declaration { name: Symbol::intern("this"), ty: self.interner.contract(id, false) };
        self.this_cache.borrow_mut().insert(id, decl);
        decl
    }

    /// As [`current_this`](Self::current_this), for `super`.
    pub fn current_super(&self) -> Declaration<'gcx> {
        let id = self.active_contract();
        if let Some(decl) = self.super_cache.borrow().get(&id) {
            return *decl;
        }
        let decl = Declaration { name: Symbol::intern("super"), ty: self.interner.contract(id, true) };
        self.super_cache.borrow_mut().insert(id, decl);
        decl
    }

    #[track_caller]
    fn active_contract(&self) -> hir::ContractId {
        self.current_contract.get().expect("current_this/current_super called with no active contract")
    }

    /// Clears the `this`/`super` memoization caches. Should be called alongside
    /// [`TypeInterner::reset`](crate::ty::TypeInterner::reset) — the contract types they hold
    /// become stale along with everything else non-atomic.
    pub fn reset(&self) {
        self.this_cache.borrow_mut().clear();
        self.super_cache.borrow_mut().clear();
    }
}

fn builtins<'gcx>(i: &TypeInterner<'gcx>) -> Vec<Declaration<'gcx>> {
    use FunctionKind::*;
    use StateMutability::{NonPayable, Pure, View};

    let u256 = i.common.uint(256);
    let bytes32 = i.common.fixed_bytes(32);
    let bytes_mem = i.bytes_memory();

    let mut decls = Vec::with_capacity(24);
    let mut push = |name: &str, ty: Ty<'gcx>| decls.push(Declaration { name: Symbol::intern(name), ty });

    push("abi", i.magic(MagicKind::Abi));
    push("block", i.magic(MagicKind::Block));
    push("msg", i.magic(MagicKind::Message));
    push("tx", i.magic(MagicKind::Transaction));
    push("now", u256);

    push("addmod", i.function_raw(&[u256, u256, u256], None, &[u256], None, AddMod, Pure, false));
    push("mulmod", i.function_raw(&[u256, u256, u256], None, &[u256], None, MulMod, Pure, false));
    push("assert", i.function_raw(&[i.common.bool_], None, &[], None, Assert, Pure, false));

    push("require", i.function_raw(&[i.common.bool_], None, &[], None, Require, Pure, false));
    push(
        "require",
        i.function_raw(&[i.common.bool_, i.string_memory()], None, &[], None, Require, Pure, false),
    );

    push("revert", i.function_raw(&[], None, &[], None, Revert, Pure, false));
    push("revert", i.function_raw(&[i.string_memory()], None, &[], None, Revert, Pure, false));

    push("blockhash", i.function_raw(&[u256], None, &[bytes32], None, BlockHash, View, false));
    push("gasleft", i.function_raw(&[], None, &[u256], None, GasLeft, View, false));

    let keccak256_ty = i.function_raw(&[bytes_mem], None, &[bytes32], None, Keccak256, Pure, false);
    push("keccak256", keccak256_ty);
    push("sha3", keccak256_ty);

    push("sha256", i.function_raw(&[bytes_mem], None, &[bytes32], None, Sha256, Pure, false));
    push(
        "ripemd160",
        i.function_raw(&[bytes_mem], None, &[i.common.fixed_bytes(20)], None, Ripemd160, Pure, false),
    );
    push(
        "ecrecover",
        i.function_raw(
            &[bytes32, i.common.uint(8), bytes32, bytes32],
            None,
            &[i.common.address],
            None,
            ECRecover,
            Pure,
            false,
        ),
    );

    let selfdestruct_ty =
        i.function_raw(&[i.common.address_payable], None, &[], None, Selfdestruct, NonPayable, false);
    push("selfdestruct", selfdestruct_ty);
    push("suicide", selfdestruct_ty);

    for (n, kind) in [Log0, Log1, Log2, Log3, Log4].into_iter().enumerate() {
        let params = vec![bytes32; n + 1];
        let name = format!("log{n}");
        push(&name, i.function_raw(&params, None, &[], None, kind, NonPayable, false));
    }

    push("type", i.function_raw(&[i.common.address], None, &[], None, MetaType, Pure, false));

    decls
}
