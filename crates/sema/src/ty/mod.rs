//! The type interner: the single source of truth for every [`Ty`] handle a
//! contract's elaborated AST can produce.

use crate::hir;
use alloy_primitives::U256;
use num_rational::BigRational;
use soltype_ast::{DataLocation, StateMutability, TypeFixedSize, TypeSize};
use soltype_interface::Symbol;

mod common;
mod error;
mod interner;
#[allow(clippy::module_inception)]
mod ty;

pub use common::{CommonTypes, EachDataLoc};
pub use error::InvalidTypeRequest;
pub use ty::{FunctionKind, MagicKind, Ty, TyData, TyFnPtr, TyKind};

use interner::Interner;
pub use interner::Arena;

type Result<T> = std::result::Result<T, InvalidTypeRequest>;

/// Runs `f` with a freshly constructed interner, in an invariant lifetime that
/// bounds every `Ty` it produces. The usual way to stand one of these up: a
/// single-compilation driver has no other caller for the arena, so there is no
/// reason to let it outlive this call.
pub fn enter<R>(f: impl for<'gcx> FnOnce(&TypeInterner<'gcx>) -> R) -> R {
    let arena = Arena::default();
    let interner = TypeInterner::new(&arena);
    f(&interner)
}

/// A process-scoped (or, in tests, call-scoped) factory that owns every type value. Holds
/// immortal atoms directly in [`CommonTypes`] and a set of content-keyed caches for everything
/// structural or nominal.
///
/// Single-writer: see the crate's concurrency notes. Nothing here is `Sync`.
pub struct TypeInterner<'gcx> {
    interner: Interner<'gcx>,
    /// The pre-populated atoms. Public: callers read these directly as often as they call the
    /// equivalent factory method, and exposing the field avoids a needless method per atom.
    pub common: CommonTypes<'gcx>,
}

impl<'gcx> TypeInterner<'gcx> {
    pub fn new(arena: &'gcx Arena) -> Self {
        let interner = Interner::new(arena);
        let common = CommonTypes::new(&interner);
        Self { interner, common }
    }

    // ---- atoms -----------------------------------------------------------------------------

    #[inline]
    pub fn bool(&self) -> Ty<'gcx> {
        self.common.bool_
    }

    #[inline]
    pub fn address(&self) -> Ty<'gcx> {
        self.common.address
    }

    #[inline]
    pub fn payable_address(&self) -> Ty<'gcx> {
        self.common.address_payable
    }

    #[inline]
    pub fn empty_tuple(&self) -> Ty<'gcx> {
        self.common.unit
    }

    /// Alias of [`empty_tuple`](Self::empty_tuple): the type of a function call whose callee
    /// produced no usable value (reverted, or any other error already diagnosed upstream).
    #[inline]
    pub fn error_type(&self) -> Ty<'gcx> {
        self.common.unit
    }

    #[inline]
    pub fn inaccessible_dynamic(&self) -> Ty<'gcx> {
        self.common.inaccessible_dynamic
    }

    // ---- elementary families ----------------------------------------------------------------

    #[inline]
    pub fn byte(&self) -> Ty<'gcx> {
        self.common.fixed_bytes(1)
    }

    pub fn fixed_bytes(&self, m: u8) -> Result<Ty<'gcx>> {
        if TypeSize::try_new_fb_bytes(m).is_some() {
            Ok(self.common.fixed_bytes(m))
        } else {
            Err(InvalidTypeRequest::BadFixedBytesLength(m))
        }
    }

    pub fn integer(&self, bits: u16, signed: bool) -> Result<Ty<'gcx>> {
        match TypeSize::try_new_int_bits(bits) {
            Some(size) if size.bits_raw() != 0 => {
                Ok(if signed { self.common.int(bits) } else { self.common.uint(bits) })
            }
            _ => Err(InvalidTypeRequest::BadIntegerWidth(bits)),
        }
    }

    pub fn fixed_point(&self, int_bits: u16, frac_bits: u8, signed: bool) -> Result<Ty<'gcx>> {
        let total = int_bits + frac_bits as u16;
        let valid_total = TypeSize::try_new_int_bits(total).is_some_and(|size| size.bits_raw() != 0);
        if valid_total && TypeFixedSize::new(frac_bits).is_some() {
            Ok(self.interner.intern_ty(TyKind::FixedPoint { int_bits, frac_bits, signed }))
        } else {
            Err(InvalidTypeRequest::BadFixedPointShape { int_bits, frac_bits })
        }
    }

    // ---- bytes / string singletons ------------------------------------------------------------

    #[inline]
    pub fn bytes_type(&self) -> Ty<'gcx> {
        self.common.bytes.storage
    }

    #[inline]
    pub fn bytes_memory(&self) -> Ty<'gcx> {
        self.common.bytes.memory
    }

    #[inline]
    pub fn string_type(&self) -> Ty<'gcx> {
        self.common.string.storage
    }

    #[inline]
    pub fn string_memory(&self) -> Ty<'gcx> {
        self.common.string.memory
    }

    // ---- arrays --------------------------------------------------------------------------------

    /// A fixed-size array of `element`, `len` elements, in `location`.
    pub fn array(&self, location: DataLocation, element: Ty<'gcx>, len: U256) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Array {
            element,
            len: Some(len),
            loc: location,
            is_string: false,
            is_pointer: false,
        })
    }

    /// A dynamically sized array of `element`, in `location`.
    pub fn dynamic_array(&self, location: DataLocation, element: Ty<'gcx>) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Array {
            element,
            len: None,
            loc: location,
            is_string: false,
            is_pointer: false,
        })
    }

    /// The dynamic `bytes`/`string` convenience: `array(location, isString?)`.
    pub fn bytes_or_string_array(&self, location: DataLocation, is_string: bool) -> Ty<'gcx> {
        match (location, is_string) {
            (DataLocation::Storage, false) => self.common.bytes.storage,
            (DataLocation::Memory, false) => self.common.bytes.memory,
            (DataLocation::Calldata, false) => self.common.bytes.calldata,
            (DataLocation::Storage, true) => self.common.string.storage,
            (DataLocation::Memory, true) => self.common.string.memory,
            (DataLocation::Calldata, true) => self.common.string.calldata,
        }
    }

    /// Interns a re-located variant of an array/struct. Non-reference types (anything other
    /// than `Array`/`Struct`) are returned unchanged, by policy.
    pub fn with_location(&self, ty: Ty<'gcx>, location: DataLocation, is_pointer: bool) -> Ty<'gcx> {
        match *ty.kind() {
            TyKind::Array { element, len, is_string, .. } => {
                self.interner.intern_ty(TyKind::Array { element, len, loc: location, is_string, is_pointer })
            }
            TyKind::Struct { decl, .. } => {
                self.interner.intern_ty(TyKind::Struct { decl, loc: location })
            }
            _ => ty,
        }
    }

    // ---- mapping / tuple -----------------------------------------------------------------------

    pub fn mapping(&self, key: Ty<'gcx>, value: Ty<'gcx>) -> Result<Ty<'gcx>> {
        if !is_valid_mapping_key(key.kind()) {
            return Err(InvalidTypeRequest::BadMappingKey(kind_name(key.kind())));
        }
        // Keys are always in storage by policy; normalize before lookup.
        let key = self.with_location(key, DataLocation::Storage, false);
        Ok(self.interner.intern_ty(TyKind::Mapping { key, value }))
    }

    pub fn tuple(&self, members: &[Ty<'gcx>]) -> Ty<'gcx> {
        if members.is_empty() {
            return self.common.unit;
        }
        self.interner.intern_ty(TyKind::Tuple(self.interner.intern_tys(members)))
    }

    // ---- function types (five shapes) -----------------------------------------------------------

    /// Shape 1: a function definition's own type (internal or external).
    #[allow(clippy::too_many_arguments)]
    pub fn function_for_definition(
        &self,
        parameters: &[Ty<'gcx>],
        parameter_names: Option<&[Option<Symbol>]>,
        returns: &[Ty<'gcx>],
        return_names: Option<&[Option<Symbol>]>,
        external: bool,
        state_mutability: StateMutability,
        owning_decl: hir::FunctionId,
    ) -> Ty<'gcx> {
        self.mk_fn_ptr(TyFnPtr {
            parameters: self.interner.intern_tys(parameters),
            parameter_names: parameter_names.map(|n| self.interner.intern_names(n)),
            returns: self.interner.intern_tys(returns),
            return_names: return_names.map(|n| self.interner.intern_names(n)),
            kind: if external { FunctionKind::External } else { FunctionKind::Internal },
            state_mutability,
            gas_set: false,
            value_set: false,
            bound: false,
            arbitrary_params: false,
            owning_decl: Some(owning_decl),
        })
    }

    /// Shape 2: the automatically generated getter for a public state variable.
    pub fn function_for_accessor(&self, parameters: &[Ty<'gcx>], returns: &[Ty<'gcx>]) -> Ty<'gcx> {
        self.mk_fn_ptr(TyFnPtr {
            parameters: self.interner.intern_tys(parameters),
            parameter_names: None,
            returns: self.interner.intern_tys(returns),
            return_names: None,
            kind: FunctionKind::External,
            state_mutability: StateMutability::View,
            gas_set: false,
            value_set: false,
            bound: false,
            arbitrary_params: false,
            owning_decl: None,
        })
    }

    /// Shape 3: an event's type.
    pub fn function_for_event(
        &self,
        parameters: &[Ty<'gcx>],
        parameter_names: Option<&[Option<Symbol>]>,
    ) -> Ty<'gcx> {
        self.mk_fn_ptr(TyFnPtr {
            parameters: self.interner.intern_tys(parameters),
            parameter_names: parameter_names.map(|n| self.interner.intern_names(n)),
            returns: &[],
            return_names: None,
            kind: FunctionKind::Event,
            state_mutability: StateMutability::NonPayable,
            gas_set: false,
            value_set: false,
            bound: false,
            arbitrary_params: false,
            owning_decl: None,
        })
    }

    /// Shape 4: an explicit `function (...) returns (...)` type name.
    #[allow(clippy::too_many_arguments)]
    pub fn function_for_type_name(
        &self,
        parameters: &[Ty<'gcx>],
        returns: &[Ty<'gcx>],
        external: bool,
        state_mutability: StateMutability,
        gas_set: bool,
        value_set: bool,
        bound: bool,
    ) -> Ty<'gcx> {
        self.mk_fn_ptr(TyFnPtr {
            parameters: self.interner.intern_tys(parameters),
            parameter_names: None,
            returns: self.interner.intern_tys(returns),
            return_names: None,
            kind: if external { FunctionKind::External } else { FunctionKind::Internal },
            state_mutability,
            gas_set,
            value_set,
            bound,
            arbitrary_params: false,
            owning_decl: None,
        })
    }

    /// Shape 5: a free-form specification, used to build the intrinsic/built-in function types
    /// that have no declaration anywhere in source. Parameter and return names are given as
    /// plain strings and interned on the way in.
    #[allow(clippy::too_many_arguments)]
    pub fn function_raw(
        &self,
        parameters: &[Ty<'gcx>],
        parameter_names: Option<&[&str]>,
        returns: &[Ty<'gcx>],
        return_names: Option<&[&str]>,
        kind: FunctionKind,
        state_mutability: StateMutability,
        arbitrary_params: bool,
    ) -> Ty<'gcx> {
        let intern_names = |names: &[&str]| -> &'gcx [Option<Symbol>] {
            self.interner.intern_ty_iter_generic(
                names.iter().map(|s| if s.is_empty() { None } else { Some(Symbol::intern(s)) }),
            )
        };
        self.mk_fn_ptr(TyFnPtr {
            parameters: self.interner.intern_tys(parameters),
            parameter_names: parameter_names.map(intern_names),
            returns: self.interner.intern_tys(returns),
            return_names: return_names.map(intern_names),
            kind,
            state_mutability,
            gas_set: false,
            value_set: false,
            bound: false,
            arbitrary_params,
            owning_decl: None,
        })
    }

    fn mk_fn_ptr(&self, ptr: TyFnPtr<'gcx>) -> Ty<'gcx> {
        let ptr = self.interner.intern_ty_fn_ptr(ptr);
        self.interner.intern_ty(TyKind::Function(ptr))
    }

    // ---- literals ------------------------------------------------------------------------------

    pub fn string_literal(&self, bytes: &[u8]) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::StringLiteral(self.interner.intern_bytes(bytes)))
    }

    pub fn rational_number(
        &self,
        value: BigRational,
        compatible_bytes: Option<Ty<'gcx>>,
    ) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::RationalNumber { value, compatible_bytes })
    }

    // ---- nominal / context-carrying kinds --------------------------------------------------------

    pub fn contract(&self, decl: hir::ContractId, is_super: bool) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Contract { decl, is_super })
    }

    pub fn struct_(&self, decl: hir::StructId, location: DataLocation) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Struct { decl, loc: location })
    }

    pub fn enum_(&self, decl: hir::EnumId) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Enum(decl))
    }

    pub fn module(&self, source_unit: hir::SourceUnitId) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Module(source_unit))
    }

    pub fn type_type(&self, of: Ty<'gcx>) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::TypeOf(of))
    }

    pub fn modifier(&self, decl: hir::ModifierId) -> Ty<'gcx> {
        self.interner.intern_ty(TyKind::Modifier(decl))
    }

    pub fn magic(&self, kind: MagicKind<'gcx>) -> Ty<'gcx> {
        match kind {
            MagicKind::Block => self.common.magic_block,
            MagicKind::Message => self.common.magic_message,
            MagicKind::Transaction => self.common.magic_transaction,
            MagicKind::Abi => self.common.magic_abi,
            MagicKind::MetaType(_) => self.interner.intern_ty(TyKind::Magic(kind)),
        }
    }

    pub fn meta_type(&self, of: Ty<'gcx>) -> Ty<'gcx> {
        self.magic(MagicKind::MetaType(of))
    }

    // ---- elementary-type-name grammar -----------------------------------------------------------

    /// Parses an elementary type name with an optional trailing data-location suffix
    /// (`" storage"` / `" memory"` / `" calldata"`, defaulting to storage).
    pub fn from_elementary_type_name(&self, name: &str) -> Result<Ty<'gcx>> {
        let (atom, suffix) = split_location_suffix(name);
        let location = match suffix {
            Some(word) => DataLocation::from_suffix_word(word)
                .ok_or_else(|| InvalidTypeRequest::InvalidLocationSuffix(word.to_string()))?,
            None => DataLocation::Storage,
        };
        self.from_elementary_type_name_with_location(atom, location)
    }

    /// As [`from_elementary_type_name`](Self::from_elementary_type_name), but the location has
    /// already been parsed out by the caller (e.g. a collaborator that tokenized the suffix
    /// itself rather than handing over the raw string).
    pub fn from_elementary_type_name_with_location(
        &self,
        atom: &str,
        location: DataLocation,
    ) -> Result<Ty<'gcx>> {
        if atom == "bool" {
            return Ok(self.bool());
        }
        if atom == "address" {
            return Ok(self.address());
        }
        if atom == "address payable" {
            return Ok(self.payable_address());
        }
        if atom == "string" {
            return Ok(self.bytes_or_string_array(location, true));
        }
        if atom == "bytes" {
            return Ok(self.bytes_or_string_array(location, false));
        }
        if let Some(digits) = atom.strip_prefix("bytes") {
            let n: u8 = digits.parse().map_err(|_| unknown(atom))?;
            return self.fixed_bytes(n);
        }
        if let Some(digits) = atom.strip_prefix("uint") {
            let bits = parse_width_default_256(digits).ok_or_else(|| unknown(atom))?;
            return self.integer(bits, false);
        }
        if let Some(digits) = atom.strip_prefix("int") {
            let bits = parse_width_default_256(digits).ok_or_else(|| unknown(atom))?;
            return self.integer(bits, true);
        }
        if let Some(rest) = atom.strip_prefix("ufixed") {
            let (m, n) = parse_fixed_shape(rest).ok_or_else(|| unknown(atom))?;
            return self.fixed_point(m, n, false);
        }
        if let Some(rest) = atom.strip_prefix("fixed") {
            let (m, n) = parse_fixed_shape(rest).ok_or_else(|| unknown(atom))?;
            return self.fixed_point(m, n, true);
        }
        Err(unknown(atom))
    }

    /// Clears every non-atom cache. Atoms ([`CommonTypes`]) survive; any handle whose kind was
    /// among the cleared caches must be treated as dangling by the caller.
    pub fn reset(&self) {
        debug!("resetting type interner");
        self.interner.reset();
    }
}

fn unknown(name: &str) -> InvalidTypeRequest {
    InvalidTypeRequest::UnknownElementaryType(name.to_string())
}

/// Strips a trailing ` storage`/` memory`/` calldata` word, if present. Unlike a blind
/// last-space split, this leaves a multi-word atom like `"address payable"` intact — there is no
/// recognized suffix word to strip, so the whole string is the atom.
fn split_location_suffix(name: &str) -> (&str, Option<&str>) {
    for suffix in [" storage", " memory", " calldata"] {
        if let Some(atom) = name.strip_suffix(suffix) {
            return (atom, Some(&suffix[1..]));
        }
    }
    (name, None)
}

/// Missing digits default to 256, per the grammar's stated policy.
fn parse_width_default_256(digits: &str) -> Option<u16> {
    if digits.is_empty() {
        return Some(256);
    }
    digits.parse().ok()
}

/// Missing digits default to 128x18, per the grammar's stated policy.
fn parse_fixed_shape(rest: &str) -> Option<(u16, u8)> {
    if rest.is_empty() {
        return Some((128, 18));
    }
    let (m, n) = rest.split_once('x')?;
    Some((m.parse().ok()?, n.parse().ok()?))
}

/// Reference types (array, struct) and other structural types with no natural ordering/hash
/// surface (mapping, function, tuple) are not valid map keys.
fn is_valid_mapping_key(kind: &TyKind<'_>) -> bool {
    !matches!(
        kind,
        TyKind::Mapping { .. } | TyKind::Function(_) | TyKind::Tuple(_) | TyKind::Array { .. } | TyKind::Struct { .. }
    )
}

fn kind_name(kind: &TyKind<'_>) -> &'static str {
    match kind {
        TyKind::Mapping { .. } => "mapping",
        TyKind::Function(_) => "function",
        TyKind::Tuple(_) => "tuple",
        TyKind::Array { is_string: true, .. } => "string/bytes",
        TyKind::Array { .. } => "array",
        TyKind::Struct { .. } => "struct",
        _ => "type",
    }
}
