use soltype_ast::DataLocation;
use soltype_sema::ty::{InvalidTypeRequest, TypeInterner};
use soltype_sema::{enter, global::GlobalContext, hir, interface};

/// Runs `f` with both a fresh session (for `Symbol::intern`) and a fresh type interner.
fn with_interner<R>(f: impl for<'gcx> FnOnce(&TypeInterner<'gcx>) -> R) -> R {
    interface::enter(|| enter(f))
}

#[test]
fn canonicity_of_structural_types() {
    with_interner(|i| {
        let a = i.tuple(&[i.bool(), i.common.uint(256)]);
        let b = i.tuple(&[i.bool(), i.common.uint(256)]);
        assert_eq!(a, b, "equivalent tuple descriptors must intern to the same handle");

        let arr_a = i.dynamic_array(DataLocation::Memory, i.common.uint(8));
        let arr_b = i.dynamic_array(DataLocation::Memory, i.common.uint(8));
        assert_eq!(arr_a, arr_b);

        // Different descriptors must not collide.
        let arr_c = i.dynamic_array(DataLocation::Storage, i.common.uint(8));
        assert_ne!(arr_a, arr_c);
    });
}

#[test]
fn factory_methods_are_idempotent() {
    with_interner(|i| {
        assert_eq!(i.integer(256, false).unwrap(), i.integer(256, false).unwrap());
        assert_eq!(i.fixed_bytes(32).unwrap(), i.fixed_bytes(32).unwrap());
        assert_eq!(i.mapping(i.address(), i.bool()).unwrap(), i.mapping(i.address(), i.bool()).unwrap());
        assert_eq!(i.fixed_point(128, 18, true).unwrap(), i.fixed_point(128, 18, true).unwrap());
    });
}

#[test]
fn grammar_round_trip_uint_default_width() {
    with_interner(|i| {
        let short = i.from_elementary_type_name("uint").unwrap();
        let explicit = i.from_elementary_type_name("uint256").unwrap();
        let typed = i.integer(256, false).unwrap();
        assert_eq!(short, explicit);
        assert_eq!(short, typed);
    });
}

#[test]
fn grammar_round_trip_bytes_and_string_locations() {
    with_interner(|i| {
        assert_eq!(i.from_elementary_type_name("bytes memory").unwrap(), i.bytes_memory());
        assert_eq!(i.from_elementary_type_name("bytes").unwrap(), i.bytes_type());
        assert_eq!(
            i.from_elementary_type_name("string calldata").unwrap(),
            i.bytes_or_string_array(DataLocation::Calldata, true)
        );
    });
}

#[test]
fn grammar_round_trip_address_payable_has_no_location_suffix() {
    with_interner(|i| {
        assert_eq!(i.from_elementary_type_name("address payable").unwrap(), i.payable_address());
        // A bare "address" must stay distinct from its payable counterpart.
        assert_ne!(i.from_elementary_type_name("address").unwrap(), i.payable_address());
    });
}

#[test]
fn grammar_rejects_unknown_names() {
    with_interner(|i| {
        assert!(matches!(
            i.from_elementary_type_name("frobnicate"),
            Err(InvalidTypeRequest::UnknownElementaryType(s)) if s == "frobnicate"
        ));
    });
}

#[test]
fn location_override_is_idempotent_through_a_chain() {
    with_interner(|i| {
        let base = i.dynamic_array(DataLocation::Storage, i.common.uint(8));
        let a = i.with_location(i.with_location(base, DataLocation::Memory, true), DataLocation::Calldata, true);
        let b = i.with_location(base, DataLocation::Calldata, true);
        assert_eq!(a, b);
    });
}

#[test]
fn with_location_is_a_no_op_for_value_types() {
    with_interner(|i| {
        let b = i.bool();
        assert_eq!(i.with_location(b, DataLocation::Memory, true), b);
    });
}

#[test]
fn reset_preserves_atoms_but_evicts_structural_cache() {
    with_interner(|i| {
        let bool_before = i.bool();
        let uint_before = i.common.uint(256);
        let tuple_before = i.tuple(&[i.bool(), i.common.uint(8)]);

        i.reset();

        assert_eq!(i.bool(), bool_before, "atoms survive reset by pointer identity");
        assert_eq!(i.common.uint(256), uint_before);

        let tuple_after = i.tuple(&[i.bool(), i.common.uint(8)]);
        assert_ne!(
            tuple_before, tuple_after,
            "a non-atom handle for an equivalent descriptor gets a fresh allocation after reset"
        );
    });
}

#[test]
fn fixed_bytes_out_of_range_reports_bad_length() {
    with_interner(|i| {
        assert_eq!(i.fixed_bytes(33), Err(InvalidTypeRequest::BadFixedBytesLength(33)));
        assert_eq!(i.fixed_bytes(0), Err(InvalidTypeRequest::BadFixedBytesLength(0)));
    });
}

#[test]
fn mapping_rejects_dynamic_key() {
    with_interner(|i| {
        let key = i.string_type();
        let value = i.integer(8, false).unwrap();
        assert!(matches!(i.mapping(key, value), Err(InvalidTypeRequest::BadMappingKey(_))));
    });
}

#[test]
fn mapping_normalizes_key_location_to_storage() {
    with_interner(|i| {
        let decl = hir::StructId::from_usize(0);
        let key_memory = i.with_location(i.struct_(decl, DataLocation::Storage), DataLocation::Memory, true);
        let key_storage = i.struct_(decl, DataLocation::Storage);
        let via_memory = i.mapping(key_memory, i.bool()).unwrap();
        let via_storage = i.mapping(key_storage, i.bool()).unwrap();
        assert_eq!(via_memory, via_storage);
    });
}

#[test]
fn tuple_of_atoms_is_pointer_stable_across_calls() {
    with_interner(|i| {
        let a = i.tuple(&[i.bool(), i.integer(256, false).unwrap()]);
        let b = i.tuple(&[i.bool(), i.integer(256, false).unwrap()]);
        assert_eq!(a, b);
    });
}

#[test]
fn function_type_ignores_parameter_names_for_equivalence() {
    with_interner(|i| {
        use soltype_interface::Symbol;

        let def = hir::FunctionId::from_usize(0);
        let a = i.function_for_definition(
            &[i.common.uint(256)],
            Some(&[Some(Symbol::intern("a"))]),
            &[i.bool()],
            None,
            true,
            soltype_ast::StateMutability::View,
            def,
        );
        let b = i.function_for_definition(
            &[i.common.uint(256)],
            Some(&[Some(Symbol::intern("b"))]),
            &[i.bool()],
            None,
            true,
            soltype_ast::StateMutability::View,
            def,
        );
        assert_eq!(a, b, "parameter names must not affect function-type identity");
    });
}

#[test]
fn builtins_present_with_duplicates_preserved() {
    interface::enter(|| {
        enter(|i| {
            let gcx = GlobalContext::new(i);
            let names: Vec<&str> = gcx.declarations().iter().map(|d| d.name.as_str()).collect();

            let require_count = names.iter().filter(|n| **n == "require").count();
            let revert_count = names.iter().filter(|n| **n == "revert").count();
            assert_eq!(require_count, 2, "require must appear twice, once per overload");
            assert_eq!(revert_count, 2, "revert must appear twice, once per overload");

            for expected in [
                "abi", "block", "msg", "tx", "now", "addmod", "mulmod", "assert", "blockhash",
                "gasleft", "keccak256", "sha3", "sha256", "ripemd160", "ecrecover", "selfdestruct",
                "suicide", "log0", "log1", "log2", "log3", "log4", "type",
            ] {
                assert!(names.contains(&expected), "missing built-in: {expected}");
            }
        });
    });
}

#[test]
fn keccak256_and_sha3_share_one_interned_type() {
    interface::enter(|| {
        enter(|i| {
            let gcx = GlobalContext::new(i);
            let keccak = gcx.declarations().iter().find(|d| d.name.as_str() == "keccak256").unwrap();
            let sha3 = gcx.declarations().iter().find(|d| d.name.as_str() == "sha3").unwrap();
            assert_eq!(keccak.ty, sha3.ty);
        });
    });
}

#[test]
fn current_this_is_memoized_then_refreshed_after_reset() {
    interface::enter(|| {
        enter(|i| {
            let gcx = GlobalContext::new(i);
            let contract = hir::ContractId::from_usize(0);
            gcx.set_current_contract(contract);

            let first = gcx.current_this();
            let second = gcx.current_this();
            assert_eq!(first.ty, i.contract(contract, false));
            assert_eq!(first.ty, second.ty, "repeated calls must return the same memoized pointer");

            i.reset();
            gcx.reset();
            gcx.set_current_contract(contract);
            let third = gcx.current_this();
            assert_ne!(first.ty, third.ty, "a fresh pointer is expected after reset");
        });
    });
}

#[test]
#[should_panic(expected = "no active contract")]
fn current_this_panics_without_active_contract() {
    interface::enter(|| {
        enter(|i| {
            let gcx = GlobalContext::new(i);
            gcx.current_this();
        });
    });
}
