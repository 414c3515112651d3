use crate::hir;
use alloy_primitives::U256;
use num_rational::BigRational;
use soltype_ast::DataLocation;
use soltype_data_structures::{fmt, Interned};
use std::hash::{Hash, Hasher};

/// An interned type: an opaque, stable handle whose equality is pointer equality.
///
/// Two handles compare equal if and only if they were produced by `intern`
/// calls whose descriptors are equivalent under the canonicalization rules in
/// [`crate::ty::Interner`] — the "Canonicity" invariant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ty<'gcx>(pub(super) Interned<'gcx, TyData<'gcx>>);

impl fmt::Debug for Ty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'gcx> std::ops::Deref for Ty<'gcx> {
    type Target = TyKind<'gcx>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0.kind
    }
}

impl<'gcx> Ty<'gcx> {
    #[inline]
    pub(super) fn new_unchecked(data: &'gcx TyData<'gcx>) -> Self {
        Self(Interned::new_unchecked(data))
    }

    /// Returns the kind of this type.
    #[inline]
    pub fn kind(self) -> &'gcx TyKind<'gcx> {
        &self.0.0.kind
    }

    /// Returns `true` if this is a reference type (array or struct) that carries a data location.
    ///
    /// `withLocation` only has an effect on these.
    pub fn is_reference_type(self) -> bool {
        matches!(self.kind(), TyKind::Array { .. } | TyKind::Struct { .. })
    }
}

/// The immutable data behind a [`Ty`] handle.
pub struct TyData<'gcx> {
    pub kind: TyKind<'gcx>,
}

impl fmt::Debug for TyData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl<'gcx> PartialEq for TyData<'gcx> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}
impl<'gcx> Eq for TyData<'gcx> {}
impl<'gcx> Hash for TyData<'gcx> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

/// The closed set of type kinds a contract's elaborated AST can produce.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum TyKind<'gcx> {
    Bool,
    Address {
        payable: bool,
    },
    Integer {
        bits: u16,
        signed: bool,
    },
    /// `bytesN`, `1 <= n.get() <= 32`.
    FixedBytes(u8),
    FixedPoint {
        /// Integer bits, a multiple of 8.
        int_bits: u16,
        /// Fractional bits, `0..=80`.
        frac_bits: u8,
        signed: bool,
    },
    Array {
        element: Ty<'gcx>,
        /// `None` for a dynamically sized array.
        len: Option<U256>,
        loc: DataLocation,
        is_string: bool,
        is_pointer: bool,
    },
    Mapping {
        key: Ty<'gcx>,
        value: Ty<'gcx>,
    },
    Tuple(&'gcx [Ty<'gcx>]),
    Function(&'gcx TyFnPtr<'gcx>),
    /// Raw bytes of a string/hex/unicode literal.
    StringLiteral(&'gcx [u8]),
    RationalNumber {
        value: BigRational,
        /// A `bytesN` type the literal is also compatible with, if any.
        compatible_bytes: Option<Ty<'gcx>>,
    },
    Contract {
        decl: hir::ContractId,
        is_super: bool,
    },
    Struct {
        decl: hir::StructId,
        loc: DataLocation,
    },
    Enum(hir::EnumId),
    Module(hir::SourceUnitId),
    /// The self-referential type-of-type, e.g. `MyEnum` in `MyEnum.Variant`.
    TypeOf(Ty<'gcx>),
    Modifier(hir::ModifierId),
    Magic(MagicKind<'gcx>),
    InaccessibleDynamic,
}

impl fmt::Debug for TyKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Address { payable } => write!(f, "Address(payable={payable})"),
            Self::Integer { bits, signed } => write!(f, "Integer({bits}, signed={signed})"),
            Self::FixedBytes(n) => write!(f, "FixedBytes({n})"),
            Self::FixedPoint { int_bits, frac_bits, signed } => {
                write!(f, "FixedPoint({int_bits}, {frac_bits}, signed={signed})")
            }
            Self::Array { element, len, loc, is_string, is_pointer } => f
                .debug_struct("Array")
                .field("element", element)
                .field("len", len)
                .field("loc", loc)
                .field("is_string", is_string)
                .field("is_pointer", is_pointer)
                .finish(),
            Self::Mapping { key, value } => {
                f.debug_struct("Mapping").field("key", key).field("value", value).finish()
            }
            Self::Tuple(members) => f.debug_tuple("Tuple").field(members).finish(),
            Self::Function(ptr) => f.debug_tuple("Function").field(ptr).finish(),
            Self::StringLiteral(bytes) => write!(f, "StringLiteral({bytes:?})"),
            Self::RationalNumber { value, compatible_bytes } => f
                .debug_struct("RationalNumber")
                .field("value", value)
                .field("compatible_bytes", compatible_bytes)
                .finish(),
            Self::Contract { decl, is_super } => {
                write!(f, "Contract({decl:?}, is_super={is_super})")
            }
            Self::Struct { decl, loc } => write!(f, "Struct({decl:?}, {loc})"),
            Self::Enum(id) => write!(f, "Enum({id:?})"),
            Self::Module(id) => write!(f, "Module({id:?})"),
            Self::TypeOf(ty) => write!(f, "TypeOf({ty:?})"),
            Self::Modifier(id) => write!(f, "Modifier({id:?})"),
            Self::Magic(kind) => write!(f, "Magic({kind:?})"),
            Self::InaccessibleDynamic => write!(f, "InaccessibleDynamic"),
        }
    }
}

// Manual `PartialEq`/`Hash`: every variant's fields are exactly its canonicalization key, which
// for `RationalNumber` means the *reduced* rational value (see `Interner::rational_number`, which
// always constructs via `BigRational::new`, so two equal values are always in the same reduced
// form and compare/hash identically).
impl<'gcx> PartialEq for TyKind<'gcx> {
    fn eq(&self, other: &Self) -> bool {
        use TyKind::*;
        match (self, other) {
            (Bool, Bool) | (InaccessibleDynamic, InaccessibleDynamic) => true,
            (Address { payable: a }, Address { payable: b }) => a == b,
            (Integer { bits: ab, signed: asig }, Integer { bits: bb, signed: bsig }) => {
                ab == bb && asig == bsig
            }
            (FixedBytes(a), FixedBytes(b)) => a == b,
            (
                FixedPoint { int_bits: ai, frac_bits: af, signed: asig },
                FixedPoint { int_bits: bi, frac_bits: bf, signed: bsig },
            ) => ai == bi && af == bf && asig == bsig,
            (
                Array { element: ae, len: al, loc: aloc, is_string: asf, is_pointer: ap },
                Array { element: be, len: bl, loc: bloc, is_string: bsf, is_pointer: bp },
            ) => ae == be && al == bl && aloc == bloc && asf == bsf && ap == bp,
            (Mapping { key: ak, value: av }, Mapping { key: bk, value: bv }) => {
                ak == bk && av == bv
            }
            (Tuple(a), Tuple(b)) => a == b,
            (Function(a), Function(b)) => a == b,
            (StringLiteral(a), StringLiteral(b)) => a == b,
            (
                RationalNumber { value: av, compatible_bytes: ac },
                RationalNumber { value: bv, compatible_bytes: bc },
            ) => av == bv && ac == bc,
            (Contract { decl: ad, is_super: asup }, Contract { decl: bd, is_super: bsup }) => {
                ad == bd && asup == bsup
            }
            (Struct { decl: ad, loc: al }, Struct { decl: bd, loc: bl }) => ad == bd && al == bl,
            (Enum(a), Enum(b)) => a == b,
            (Module(a), Module(b)) => a == b,
            (TypeOf(a), TypeOf(b)) => a == b,
            (Modifier(a), Modifier(b)) => a == b,
            (Magic(a), Magic(b)) => a == b,
            _ => false,
        }
    }
}
impl<'gcx> Eq for TyKind<'gcx> {}

impl<'gcx> Hash for TyKind<'gcx> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        use TyKind::*;
        match self {
            Bool | InaccessibleDynamic => {}
            Address { payable } => payable.hash(state),
            Integer { bits, signed } => {
                bits.hash(state);
                signed.hash(state);
            }
            FixedBytes(n) => n.hash(state),
            FixedPoint { int_bits, frac_bits, signed } => {
                int_bits.hash(state);
                frac_bits.hash(state);
                signed.hash(state);
            }
            Array { element, len, loc, is_string, is_pointer } => {
                element.hash(state);
                len.hash(state);
                loc.hash(state);
                is_string.hash(state);
                is_pointer.hash(state);
            }
            Mapping { key, value } => {
                key.hash(state);
                value.hash(state);
            }
            Tuple(members) => members.hash(state),
            Function(ptr) => ptr.hash(state),
            StringLiteral(bytes) => bytes.hash(state),
            RationalNumber { value, compatible_bytes } => {
                value.hash(state);
                compatible_bytes.hash(state);
            }
            Contract { decl, is_super } => {
                decl.hash(state);
                is_super.hash(state);
            }
            Struct { decl, loc } => {
                decl.hash(state);
                loc.hash(state);
            }
            Enum(id) => id.hash(state),
            Module(id) => id.hash(state),
            TypeOf(ty) => ty.hash(state),
            Modifier(id) => id.hash(state),
            Magic(kind) => kind.hash(state),
        }
    }
}

/// The kind of a [`TyKind::Function`]: its closed calling-convention/intrinsic set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FunctionKind {
    Internal,
    External,
    CallCode,
    DelegateCall,
    BareCall,
    Creation,
    Send,
    Transfer,
    Keccak256,
    ECRecover,
    Sha256,
    Ripemd160,
    Log0,
    Log1,
    Log2,
    Log3,
    Log4,
    GasLeft,
    BlockHash,
    AddMod,
    MulMod,
    Assert,
    Require,
    Revert,
    Selfdestruct,
    MetaType,
    Event,
}

/// The data behind [`TyKind::Function`].
///
/// Parameter and return *names* are stored but deliberately excluded from `PartialEq`/`Hash`
/// below: two function types that differ only in argument or return names are the same type.
#[derive(Debug)]
pub struct TyFnPtr<'gcx> {
    pub parameters: &'gcx [Ty<'gcx>],
    pub parameter_names: Option<&'gcx [Option<soltype_interface::Symbol>]>,
    pub returns: &'gcx [Ty<'gcx>],
    pub return_names: Option<&'gcx [Option<soltype_interface::Symbol>]>,
    pub kind: FunctionKind,
    pub state_mutability: soltype_ast::StateMutability,
    pub gas_set: bool,
    pub value_set: bool,
    pub bound: bool,
    pub arbitrary_params: bool,
    /// The declaration this function type is bound to, when it has an owner (a function
    /// definition, event, or function-type-name); intrinsics constructed by the global context
    /// have no owner.
    pub owning_decl: Option<hir::FunctionId>,
}

impl<'gcx> PartialEq for TyFnPtr<'gcx> {
    fn eq(&self, other: &Self) -> bool {
        self.parameters == other.parameters
            && self.returns == other.returns
            && self.kind == other.kind
            && self.state_mutability == other.state_mutability
            && self.gas_set == other.gas_set
            && self.value_set == other.value_set
            && self.bound == other.bound
            && self.arbitrary_params == other.arbitrary_params
            && self.owning_decl == other.owning_decl
    }
}
impl<'gcx> Eq for TyFnPtr<'gcx> {}

impl<'gcx> Hash for TyFnPtr<'gcx> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parameters.hash(state);
        self.returns.hash(state);
        self.kind.hash(state);
        self.state_mutability.hash(state);
        self.gas_set.hash(state);
        self.value_set.hash(state);
        self.bound.hash(state);
        self.arbitrary_params.hash(state);
        self.owning_decl.hash(state);
    }
}

/// A "magic" namespace kind: the fixed set of globally visible namespace objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicKind<'gcx> {
    Block,
    Message,
    Transaction,
    Abi,
    /// `type(X)`, carrying the type `X` it reflects over.
    MetaType(Ty<'gcx>),
}
