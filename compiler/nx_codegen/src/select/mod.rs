//! Export selection.
//!
//! Decides which types and methods cross the native boundary. A method is
//! exported when it carries the export marker; a type is exported when it
//! carries the marker or declares an exported method. Both flags are fixed
//! when the model is built, so selection is a pure walk over the snapshot.
//!
//! Traversal order is declaration order and is never re-sorted: two walks
//! over the same model always agree.

use nx_model::{MethodId, NamespaceId, Symbol, SymbolModel, TypeDeclId};

/// Whether `symbol` is exposed to native callers. Namespaces never are.
pub fn is_exported(model: &SymbolModel, symbol: Symbol) -> bool {
    match symbol {
        Symbol::Namespace(_) => false,
        Symbol::Type(id) => model.type_decl(id).exported,
        Symbol::Method(id) => model.method(id).exported,
    }
}

/// Every type declared directly in `root` or any namespace below it.
///
/// Each namespace yields its own types first, then descends into its child
/// namespaces in order. Nested types are not visited.
pub fn all_types(model: &SymbolModel, root: NamespaceId) -> AllTypes<'_> {
    AllTypes {
        model,
        current: std::slice::Iter::default(),
        pending: vec![root],
    }
}

/// Exported types of the whole model, in traversal order.
pub fn exported_types(model: &SymbolModel) -> impl Iterator<Item = TypeDeclId> + '_ {
    all_types(model, model.root()).filter(move |&ty| is_exported(model, Symbol::Type(ty)))
}

/// Exported methods of `ty`, in declaration order.
pub fn exported_methods(
    model: &SymbolModel,
    ty: TypeDeclId,
) -> impl Iterator<Item = MethodId> + '_ {
    model
        .type_decl(ty)
        .methods
        .iter()
        .copied()
        .filter(move |&m| is_exported(model, Symbol::Method(m)))
}

/// Lazy pre-order walk returned by [`all_types`].
pub struct AllTypes<'a> {
    model: &'a SymbolModel,
    current: std::slice::Iter<'a, TypeDeclId>,
    /// Namespaces still to visit; the next one is on top.
    pending: Vec<NamespaceId>,
}

impl Iterator for AllTypes<'_> {
    type Item = TypeDeclId;

    fn next(&mut self) -> Option<TypeDeclId> {
        loop {
            if let Some(&ty) = self.current.next() {
                return Some(ty);
            }
            let ns = self.model.namespace(self.pending.pop()?);
            self.current = ns.types.iter();
            self.pending.extend(ns.namespaces.iter().rev().copied());
        }
    }
}
