use super::{Interner, MagicKind, Ty, TyKind};
use soltype_ast::DataLocation;
use tracing::instrument;

/// Holds an instance of `T` for each data location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EachDataLoc<T> {
    pub storage: T,
    pub memory: T,
    pub calldata: T,
}

impl<T: Copy> EachDataLoc<T> {
    #[inline]
    pub fn get(&self, loc: DataLocation) -> T {
        *self.get_ref(loc)
    }
}

impl<T> EachDataLoc<T> {
    #[inline]
    pub fn get_ref(&self, loc: DataLocation) -> &T {
        match loc {
            DataLocation::Storage => &self.storage,
            DataLocation::Memory => &self.memory,
            DataLocation::Calldata => &self.calldata,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, loc: DataLocation) -> &mut T {
        match loc {
            DataLocation::Storage => &mut self.storage,
            DataLocation::Memory => &mut self.memory,
            DataLocation::Calldata => &mut self.calldata,
        }
    }
}

impl<T> std::ops::Index<DataLocation> for EachDataLoc<T> {
    type Output = T;

    #[inline]
    fn index(&self, loc: DataLocation) -> &T {
        self.get_ref(loc)
    }
}

impl<T> std::ops::IndexMut<DataLocation> for EachDataLoc<T> {
    #[inline]
    fn index_mut(&mut self, loc: DataLocation) -> &mut T {
        self.get_mut(loc)
    }
}

/// Atoms an interner pre-populates before any factory method runs: the 32 signed and 32 unsigned
/// integers, the 32 fixed-bytes widths, the two address variants, `bool`, the four magic
/// namespaces, the empty tuple, the canonical `bytes`/`string` arrays for every data location, and
/// the inaccessible-dynamic marker.
///
/// None of these ever pass through the interner's general structural/nominal caches, so they
/// outlive `reset()` by construction: `reset()` only clears those caches, never `CommonTypes`.
pub struct CommonTypes<'gcx> {
    pub unit: Ty<'gcx>,
    pub bool_: Ty<'gcx>,

    pub address: Ty<'gcx>,
    pub address_payable: Ty<'gcx>,

    pub bytes: EachDataLoc<Ty<'gcx>>,
    pub string: EachDataLoc<Ty<'gcx>>,

    pub inaccessible_dynamic: Ty<'gcx>,

    pub magic_block: Ty<'gcx>,
    pub magic_message: Ty<'gcx>,
    pub magic_transaction: Ty<'gcx>,
    pub magic_abi: Ty<'gcx>,

    ints: [Ty<'gcx>; 32],
    uints: [Ty<'gcx>; 32],
    fbs: [Ty<'gcx>; 32],
}

impl<'gcx> CommonTypes<'gcx> {
    #[instrument(name = "new_common_types", level = "debug", skip_all)]
    pub(super) fn new(interner: &Interner<'gcx>) -> Self {
        use std::array::from_fn;

        let mk = |kind| interner.intern_atom(kind);

        let fbs: [Ty<'gcx>; 32] = from_fn(|i| mk(TyKind::FixedBytes(i as u8 + 1)));
        let byte = fbs[0];

        let mk_array = |is_string, loc| {
            mk(TyKind::Array { element: byte, len: None, loc, is_string, is_pointer: false })
        };

        Self {
            unit: mk(TyKind::Tuple(&[])),
            bool_: mk(TyKind::Bool),

            address: mk(TyKind::Address { payable: false }),
            address_payable: mk(TyKind::Address { payable: true }),

            bytes: EachDataLoc {
                storage: mk_array(false, DataLocation::Storage),
                memory: mk_array(false, DataLocation::Memory),
                calldata: mk_array(false, DataLocation::Calldata),
            },
            string: EachDataLoc {
                storage: mk_array(true, DataLocation::Storage),
                memory: mk_array(true, DataLocation::Memory),
                calldata: mk_array(true, DataLocation::Calldata),
            },

            inaccessible_dynamic: mk(TyKind::InaccessibleDynamic),

            magic_block: mk(TyKind::Magic(MagicKind::Block)),
            magic_message: mk(TyKind::Magic(MagicKind::Message)),
            magic_transaction: mk(TyKind::Magic(MagicKind::Transaction)),
            magic_abi: mk(TyKind::Magic(MagicKind::Abi)),

            ints: from_fn(|i| mk(TyKind::Integer { bits: (i as u16 + 1) * 8, signed: true })),
            uints: from_fn(|i| mk(TyKind::Integer { bits: (i as u16 + 1) * 8, signed: false })),
            fbs,
        }
    }

    /// `intN`, `bits` a multiple of 8 in `8..=256`.
    #[inline]
    #[track_caller]
    pub fn int(&self, bits: u16) -> Ty<'gcx> {
        assert!(bits % 8 == 0 && (8..=256).contains(&bits), "invalid integer size: {bits}");
        self.ints[(bits / 8) as usize - 1]
    }

    /// `uintN`, `bits` a multiple of 8 in `8..=256`.
    #[inline]
    #[track_caller]
    pub fn uint(&self, bits: u16) -> Ty<'gcx> {
        assert!(bits % 8 == 0 && (8..=256).contains(&bits), "invalid integer size: {bits}");
        self.uints[(bits / 8) as usize - 1]
    }

    /// `bytesN`, `n` in `1..=32`.
    #[inline]
    #[track_caller]
    pub fn fixed_bytes(&self, n: u8) -> Ty<'gcx> {
        assert!((1..=32).contains(&n), "invalid fixed-bytes length: {n}");
        self.fbs[n as usize - 1]
    }
}
