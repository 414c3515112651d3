//! Type interner.
//!
//! Creates and stores the unique instances of types, type lists, function
//! pointers, and byte strings that back every [`Ty`] handle. Single-writer:
//! there is one interner per global context, used from one thread, so the
//! caches below are plain `RefCell<HashMap<..>>` rather than the sharded
//! concurrent maps a multi-threaded front end would need.

use super::{Ty, TyData, TyFnPtr, TyKind};
use soltype_data_structures::{map::FxHashMap, Interned};
use std::cell::RefCell;

/// Owns the arena all interned data lives in.
#[derive(Default)]
pub struct Arena {
    bump: bumpalo::Bump,
}

pub(super) struct Interner<'gcx> {
    arena: &'gcx Arena,

    tys: RefCell<FxHashMap<TyKind<'gcx>, Ty<'gcx>>>,
    ty_lists: RefCell<FxHashMap<&'gcx [Ty<'gcx>], &'gcx [Ty<'gcx>]>>,
    name_lists: RefCell<FxHashMap<&'gcx [Option<soltype_interface::Symbol>], &'gcx [Option<soltype_interface::Symbol>]>>,
    fn_ptrs: RefCell<FxHashMap<&'gcx TyFnPtr<'gcx>, &'gcx TyFnPtr<'gcx>>>,
    byte_strings: RefCell<FxHashMap<&'gcx [u8], &'gcx [u8]>>,

    /// Kinds pre-populated by `CommonTypes::new`; these are the only entries `reset` preserves.
    atoms: RefCell<Vec<TyKind<'gcx>>>,
}

impl<'gcx> Interner<'gcx> {
    pub(super) fn new(arena: &'gcx Arena) -> Self {
        Self {
            arena,
            tys: RefCell::new(FxHashMap::default()),
            ty_lists: RefCell::new(FxHashMap::default()),
            name_lists: RefCell::new(FxHashMap::default()),
            fn_ptrs: RefCell::new(FxHashMap::default()),
            byte_strings: RefCell::new(FxHashMap::default()),
            atoms: RefCell::new(Vec::new()),
        }
    }

    fn bump(&self) -> &'gcx bumpalo::Bump {
        &self.arena.bump
    }

    /// Interns a type that is never evicted by [`reset`](Self::reset) — used only to build the
    /// fixed [`CommonTypes`](super::CommonTypes) atom table, which is constructed once and lives
    /// for the whole life of the global context.
    pub(super) fn intern_atom(&self, kind: TyKind<'gcx>) -> Ty<'gcx> {
        self.atoms.borrow_mut().push(kind.clone());
        self.intern_ty(kind)
    }

    pub(super) fn intern_ty(&self, kind: TyKind<'gcx>) -> Ty<'gcx> {
        if let Some(ty) = self.tys.borrow().get(&kind) {
            return *ty;
        }
        let data: &'gcx TyData<'gcx> = self.bump().alloc(TyData { kind: kind.clone() });
        let ty = Ty::new_unchecked(data);
        self.tys.borrow_mut().insert(kind, ty);
        ty
    }

    pub(super) fn intern_tys(&self, tys: &[Ty<'gcx>]) -> &'gcx [Ty<'gcx>] {
        if tys.is_empty() {
            return &[];
        }
        if let Some(slice) = self.ty_lists.borrow().get(tys) {
            return slice;
        }
        let slice: &'gcx [Ty<'gcx>] = self.bump().alloc_slice_copy(tys);
        self.ty_lists.borrow_mut().insert(slice, slice);
        slice
    }

    /// Interns a list of optional parameter/return names.
    pub(super) fn intern_names(
        &self,
        names: &[Option<soltype_interface::Symbol>],
    ) -> &'gcx [Option<soltype_interface::Symbol>] {
        if names.is_empty() {
            return &[];
        }
        if let Some(slice) = self.name_lists.borrow().get(names) {
            return slice;
        }
        let slice: &'gcx [Option<soltype_interface::Symbol>] = self.bump().alloc_slice_copy(names);
        self.name_lists.borrow_mut().insert(slice, slice);
        slice
    }

    /// Collects an arbitrary iterator of optional names into the arena, deduping via
    /// [`intern_names`](Self::intern_names).
    pub(super) fn intern_ty_iter_generic(
        &self,
        names: impl Iterator<Item = Option<soltype_interface::Symbol>>,
    ) -> &'gcx [Option<soltype_interface::Symbol>] {
        let collected: Vec<_> = names.collect();
        self.intern_names(&collected)
    }

    pub(super) fn intern_bytes(&self, bytes: &[u8]) -> &'gcx [u8] {
        if bytes.is_empty() {
            return &[];
        }
        if let Some(slice) = self.byte_strings.borrow().get(bytes) {
            return slice;
        }
        let slice: &'gcx [u8] = self.bump().alloc_slice_copy(bytes);
        self.byte_strings.borrow_mut().insert(slice, slice);
        slice
    }

    pub(super) fn intern_ty_fn_ptr(&self, ptr: TyFnPtr<'gcx>) -> &'gcx TyFnPtr<'gcx> {
        if let Some(&existing) = self.fn_ptrs.borrow().get(&ptr) {
            return existing;
        }
        let ptr: &'gcx TyFnPtr<'gcx> = self.bump().alloc(ptr);
        self.fn_ptrs.borrow_mut().insert(ptr, ptr);
        ptr
    }

    /// Drops every cache entry that is not part of [`CommonTypes`](super::CommonTypes). The
    /// arena itself is never reclaimed: a stale `Ty` handle from before `reset()` still points at
    /// valid (if now orphaned) memory, it is simply no longer reachable through the interner's
    /// caches.
    pub(super) fn reset(&self) {
        let atoms = self.atoms.borrow();
        self.tys.borrow_mut().retain(|kind, _| atoms.contains(kind));
        self.ty_lists.borrow_mut().clear();
        self.name_lists.borrow_mut().clear();
        self.fn_ptrs.borrow_mut().clear();
        self.byte_strings.borrow_mut().clear();
    }
}
