//! Qualified and assembly-qualified names.
//!
//! Both walk the containment chain of a symbol (method, type, enclosing
//! types, namespaces). The global namespace has an empty name and never
//! contributes a segment.

use nx_model::{QualifiedPath, Symbol, SymbolModel, TypeCategory, TypeDeclId, TypeRef};

/// Separator between a nested type and its enclosing type in runtime names.
const NESTED_TYPE_SEP: char = '+';

/// Non-blank names on the containment chain, root first.
fn path_segments(model: &SymbolModel, symbol: Symbol) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut current = Some(symbol);
    while let Some(symbol) = current {
        let name = model.name(symbol);
        if !name.trim().is_empty() {
            segments.push(name);
        }
        current = model.container(symbol);
    }
    segments.reverse();
    segments
}

/// Names on the containment chain of `symbol` joined root-to-leaf with
/// `delimiter`, e.g. `Demo::Shapes::Circle`.
pub fn qualified_name(model: &SymbolModel, symbol: Symbol, delimiter: &str) -> String {
    path_segments(model, symbol).join(delimiter)
}

/// The runtime lookup key for a symbol: its metadata path followed by the
/// assembly identity, e.g. `Demo.Outer+Inner, Demo, Version=1.0.0.0, ...`.
///
/// Enclosing types are separated from the type they enclose by `+`; every
/// other step uses `.`. Empty for `None` and for the global namespace.
pub fn assembly_qualified_name(model: &SymbolModel, symbol: Option<Symbol>) -> String {
    let Some(symbol) = symbol else {
        return String::new();
    };
    if is_global_namespace(symbol) {
        return String::new();
    }

    let mut name = model.name(symbol).to_string();
    let mut inner = symbol;
    let mut outer = model.container(symbol);

    while let Some(enclosing) = outer.filter(|&s| !is_global_namespace(s)) {
        let sep = match (enclosing, inner) {
            (Symbol::Type(_), Symbol::Type(_)) => NESTED_TYPE_SEP,
            _ => '.',
        };
        name.insert(0, sep);
        name.insert_str(0, model.name(enclosing));
        inner = enclosing;
        outer = model.container(enclosing);
    }

    format!("{name}, {}", model.assembly())
}

fn is_global_namespace(symbol: Symbol) -> bool {
    matches!(symbol, Symbol::Namespace(ns) if ns.is_root())
}

/// A declared type as it would appear in a signature.
pub fn type_ref(model: &SymbolModel, ty: TypeDeclId) -> TypeRef {
    let path = QualifiedPath::new(path_segments(model, Symbol::Type(ty)));
    match model.type_decl(ty).category {
        TypeCategory::Reference => TypeRef::Reference(path),
        TypeCategory::Value => TypeRef::Value(path),
    }
}
