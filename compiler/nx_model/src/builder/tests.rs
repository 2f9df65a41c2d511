use super::*;
use crate::PrimitiveKind;
use pretty_assertions::assert_eq;

fn builder() -> ModelBuilder {
    ModelBuilder::new(AssemblyIdentity::new("Demo", Version::new(1, 0, 0)))
}

fn int32() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Int32)
}

#[test]
fn test_type_exported_through_method() {
    let mut b = builder();
    let ns = b.namespace_path("Demo");
    let foo = b.add_class(ns, "Foo");
    b.add_method(foo, MethodSpec::method("Bar").returns(int32()).exported());
    b.add_method(foo, MethodSpec::method("Hidden"));
    let model = b.finish();

    let ty = model.type_decl(foo);
    assert!(!ty.export_marked);
    assert!(ty.exported);
    let flags: Vec<bool> = ty.methods.iter().map(|&m| model.method(m).exported).collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_type_exported_directly() {
    let mut b = builder();
    let foo = b.add_class(b.root(), "Foo");
    b.export(Symbol::Type(foo));
    b.add_method(foo, MethodSpec::method("Bar"));
    let model = b.finish();

    assert!(model.type_decl(foo).export_marked);
    assert!(model.type_decl(foo).exported);
    assert!(!model.method(model.type_decl(foo).methods[0]).exported);
}

#[test]
fn test_propagation_stops_at_the_declaring_type() {
    let mut b = builder();
    let ns = b.namespace_path("Demo");
    let outer = b.add_class(ns, "Outer");
    let inner = b.add_class(outer, "Inner");
    b.add_method(inner, MethodSpec::method("Run").exported());
    let model = b.finish();

    assert!(model.type_decl(inner).exported);
    assert!(!model.type_decl(outer).exported);
}

#[test]
fn test_other_attributes_do_not_export() {
    let mut b = builder();
    let foo = b.add_class(b.root(), "Foo");
    b.add_attribute(Symbol::Type(foo), "System.SerializableAttribute");
    b.add_method(foo, MethodSpec::method("Bar").attribute("Other.ExportAttribute"));
    let model = b.finish();

    assert!(!model.type_decl(foo).exported);
    assert_eq!(
        model.attributes(Symbol::Type(foo)),
        ["System.SerializableAttribute".to_string()]
    );
}

#[test]
fn test_namespaces_merge() {
    let mut b = builder();
    let first = b.namespace_path("Demo.Shapes");
    let second = b.namespace_path("Demo.Shapes");
    let demo = b.namespace_path("Demo");
    assert_eq!(first, second);

    let model = b.finish();
    assert_eq!(model.namespace(model.root()).namespaces, vec![demo]);
    assert_eq!(model.namespace(demo).namespaces, vec![first]);
    assert_eq!(model.namespace(first).parent, Some(demo));
}

#[test]
fn test_constructor_is_never_static() {
    let mut b = builder();
    let foo = b.add_class(b.root(), "Foo");
    let ctor = b.add_method(foo, MethodSpec::constructor().static_().param("i", int32()));
    let model = b.finish();

    let method = model.method(ctor);
    assert!(method.is_constructor);
    assert!(!method.is_static);
    assert!(method.return_type.is_void());
    assert!(!method.takes_handle());
}

#[test]
fn test_declaration_order_preserved() {
    let mut b = builder();
    let ns = b.namespace_path("Demo");
    let names = ["Zeta", "Alpha", "Mid"];
    for name in names {
        b.add_class(ns, name);
    }
    let model = b.finish();

    let declared: Vec<&str> = model
        .namespace(ns)
        .types
        .iter()
        .map(|&t| model.type_decl(t).name.as_str())
        .collect();
    assert_eq!(declared, names);
}

#[test]
fn test_diagnostics_and_runtime_version() {
    let mut b = builder();
    b.set_runtime_version(Version::new(8, 0, 1));
    b.add_diagnostic(Diagnostic::warning("CS0168", "unused"));
    let model = b.finish();

    assert_eq!(model.runtime_version(), Version::new(8, 0, 1));
    assert_eq!(model.diagnostics().len(), 1);
    assert!(!model.has_errors());
}

#[test]
fn test_declared_classes_become_reference_types() {
    let mut b = builder();
    let ns = b.namespace_path("Demo");
    let widget = b.add_class(ns, "Widget");
    let lid = b.add_class(widget, "Lid");
    b.add_type(ns, "Point", TypeCategory::Value);
    let put = b.add_method(
        widget,
        MethodSpec::method("Put")
            .param("w", TypeRef::value("Demo.Widget"))
            .param("lid", TypeRef::value("Demo.Widget+Lid"))
            .param("p", TypeRef::value("Demo.Point"))
            .param("ptr", TypeRef::pointer_to(TypeRef::value("Demo.Point")))
            .param("other", TypeRef::value("Elsewhere.Thing"))
            .returns(TypeRef::value("Demo.Widget")),
    );
    let model = b.finish();
    assert_eq!(model.find_type("Demo.Widget.Lid"), Some(lid));

    let method = model.method(put);
    let types: Vec<&TypeRef> = method.parameters.iter().map(|p| &p.ty).collect();
    assert_eq!(
        types,
        [
            &TypeRef::reference("Demo.Widget"),
            &TypeRef::reference("Demo.Widget.Lid"),
            &TypeRef::value("Demo.Point"),
            &TypeRef::pointer_to(TypeRef::value("Demo.Point")),
            &TypeRef::value("Elsewhere.Thing"),
        ]
    );
    assert_eq!(method.return_type, TypeRef::reference("Demo.Widget"));
}
