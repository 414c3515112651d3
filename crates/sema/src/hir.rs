//! Opaque identities for the AST collaborators this core does not implement.
//!
//! `FunctionDefinition`, `VariableDeclaration`, `EventDefinition`,
//! `FunctionTypeName`, `ContractDefinition`, `StructDefinition`,
//! `EnumDefinition`, `ModifierDefinition`, and `SourceUnit` each need only a
//! stable identity usable as a cache key here. Lexing, parsing, and name
//! resolution — the passes that would actually produce these — are out of
//! scope, so each identity is a bare
//! [`index_vec`](soltype_data_structures::index) newtype index and nothing
//! more: no signature, no member list, no source span. Downstream
//! collaborators are expected to hang that data off the same id via their own
//! side tables.

use soltype_data_structures::index::define_index_type;

define_index_type! {
    /// Identifies a `ContractDefinition`.
    pub struct ContractId = u32;
}

define_index_type! {
    /// Identifies a `StructDefinition`.
    pub struct StructId = u32;
}

define_index_type! {
    /// Identifies an `EnumDefinition`.
    pub struct EnumId = u32;
}

define_index_type! {
    /// Identifies a `ModifierDefinition`.
    pub struct ModifierId = u32;
}

define_index_type! {
    /// Identifies a `SourceUnit`.
    pub struct SourceUnitId = u32;
}

define_index_type! {
    /// Identifies a `FunctionDefinition`.
    pub struct FunctionId = u32;
}

define_index_type! {
    /// Identifies a `VariableDeclaration`.
    pub struct VariableId = u32;
}

define_index_type! {
    /// Identifies an `EventDefinition`.
    pub struct EventId = u32;
}

define_index_type! {
    /// Identifies a `FunctionTypeName`.
    pub struct FunctionTypeNameId = u32;
}
