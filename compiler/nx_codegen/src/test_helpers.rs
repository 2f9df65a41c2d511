//! Shared model fixtures for unit tests.

use nx_model::{
    AssemblyIdentity, MethodSpec, ModelBuilder, PrimitiveKind, SymbolModel, TypeRef, Version,
};

pub fn int32() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Int32)
}

/// A builder with the runtime support type `NativeExposer.Internal` and its
/// static `Free(IntPtr)` hook already declared.
pub fn builder_with_runtime(assembly: &str) -> ModelBuilder {
    let mut b = ModelBuilder::new(AssemblyIdentity::new(assembly, Version::new(1, 0, 0)));
    b.set_runtime_version(Version::new(8, 0, 1));
    let ns = b.namespace_path("NativeExposer");
    let internal = b.add_class(ns, "Internal");
    b.add_method(
        internal,
        MethodSpec::method("Free")
            .static_()
            .param("handle", TypeRef::primitive(PrimitiveKind::IntPtr)),
    );
    b
}

/// `NativeExposer.Test.Foo` with an exported `Foo(int)` constructor and an
/// exported instance method `int Bar(int a, int b)`.
pub fn foo_model() -> SymbolModel {
    let mut b = builder_with_runtime("NativeExposer.Test");
    let ns = b.namespace_path("NativeExposer.Test");
    let foo = b.add_class(ns, "Foo");
    b.add_method(foo, MethodSpec::constructor().param("i", int32()).exported());
    b.add_method(
        foo,
        MethodSpec::method("Bar")
            .returns(int32())
            .param("a", int32())
            .param("b", int32())
            .exported(),
    );
    b.add_method(foo, MethodSpec::method("Hidden"));
    b.finish()
}
