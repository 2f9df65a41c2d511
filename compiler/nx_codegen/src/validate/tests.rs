use nx_model::{
    AssemblyIdentity, MethodSpec, ModelBuilder, PrimitiveKind, Symbol, TypeRef, Version,
};
use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{builder_with_runtime, foo_model, int32};

#[test]
fn test_valid_model() {
    let model = foo_model();
    let plan = ExportPlan::validate(&model).unwrap();

    let hook = model.method(plan.deallocation_hook);
    assert_eq!(hook.name, "Free");
    assert_eq!(
        qualified_name(&model, Symbol::Method(plan.deallocation_hook), "."),
        "NativeExposer.Internal.Free"
    );
}

#[test]
fn test_missing_support_type() {
    let model = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::default())).finish();
    let err = ExportPlan::validate(&model).unwrap_err();
    assert_eq!(
        err.to_string(),
        "deallocation hook `NativeExposer.Internal.Free` is not declared"
    );
}

#[test]
fn test_support_type_without_hook() {
    let mut b = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::default()));
    let ns = b.namespace_path("NativeExposer");
    let internal = b.add_class(ns, "Internal");
    b.add_method(internal, MethodSpec::method("Release").static_());
    let model = b.finish();

    assert!(matches!(
        ExportPlan::validate(&model).unwrap_err(),
        CodegenError::MissingDeallocationHook { .. }
    ));
}

#[test]
fn test_ambiguous_hook() {
    let mut b = builder_with_runtime("Demo");
    let ns = b.namespace_path("NativeExposer");
    // A second declaration of the support type, as a partial type would produce.
    let internal = b.add_class(ns, "Internal");
    b.add_method(
        internal,
        MethodSpec::method("Free").static_().param("other", TypeRef::reference("System.Object")),
    );
    let model = b.finish();

    assert_eq!(
        ExportPlan::validate(&model).unwrap_err(),
        CodegenError::AmbiguousDeallocationHook {
            type_name: "NativeExposer.Internal",
            method: "Free",
            count: 2,
        }
    );
}

#[test]
fn test_hook_signature_checked() {
    let mut b = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::default()));
    let ns = b.namespace_path("NativeExposer");
    let internal = b.add_class(ns, "Internal");
    b.add_method(
        internal,
        MethodSpec::method("Free")
            .static_()
            .param("a", TypeRef::primitive(PrimitiveKind::IntPtr))
            .param("b", int32()),
    );
    let model = b.finish();

    assert_eq!(
        ExportPlan::validate(&model).unwrap_err().to_string(),
        "deallocation hook `static Free(System.IntPtr, System.Int32)` must take exactly one object handle"
    );
}

#[test]
fn test_instance_hook_accepted() {
    let mut b = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::default()));
    let ns = b.namespace_path("NativeExposer");
    let internal = b.add_class(ns, "Internal");
    let free = b.add_method(internal, MethodSpec::method("Free"));
    let model = b.finish();

    assert_eq!(ExportPlan::validate(&model).unwrap().deallocation_hook, free);
}

#[test]
fn test_mangling_collision_rejected() {
    let mut b = builder_with_runtime("Demo");
    let ns = b.namespace_path("Demo");
    let foo = b.add_class(ns, "Foo");
    b.add_method(foo, MethodSpec::method("Get").returns(int32()).exported());
    b.add_method(
        foo,
        MethodSpec::method("Get")
            .returns(TypeRef::primitive(PrimitiveKind::Double))
            .exported(),
    );
    let model = b.finish();

    assert_eq!(
        ExportPlan::validate(&model).unwrap_err(),
        CodegenError::ManglingCollision {
            type_name: "Demo.Foo".to_string(),
            symbol: "_NGetEt".to_string(),
            first: "Get()".to_string(),
            second: "Get()".to_string(),
        }
    );
}

#[test]
fn test_collisions_only_among_exported_methods() {
    let mut b = builder_with_runtime("Demo");
    let ns = b.namespace_path("Demo");
    let foo = b.add_class(ns, "Foo");
    b.add_method(foo, MethodSpec::method("Get").param("x", int32()).exported());
    b.add_method(foo, MethodSpec::method("Get").param("y", int32()));
    // Same symbol on another type is fine: lookups are per type.
    let bar = b.add_class(ns, "Bar");
    b.add_method(bar, MethodSpec::method("Get").param("x", int32()).exported());
    let model = b.finish();

    assert!(ExportPlan::validate(&model).is_ok());
}
