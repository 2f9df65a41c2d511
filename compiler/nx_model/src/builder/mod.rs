//! Incremental construction of a [`SymbolModel`].
//!
//! The builder is the only way to create a model. Snapshot loaders drive it
//! from parsed data and tests drive it directly as an in-memory fixture:
//!
//! ```text
//! let mut b = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::new(1, 0, 0)));
//! let ns = b.namespace_path("Demo.Shapes");
//! let circle = b.add_type(ns, "Circle", TypeCategory::Reference);
//! b.add_method(circle, MethodSpec::constructor().param("r", f64).exported());
//! let model = b.finish();
//! ```
//!
//! [`finish`](ModelBuilder::finish) derives the export flags; nothing about
//! a finished model changes afterwards.

use nx_diagnostic::Diagnostic;

use crate::model::{
    AssemblyIdentity, Container, Method, Namespace, Parameter, Symbol, SymbolModel, TypeCategory,
    TypeDecl, Version,
};
use crate::{MethodId, NamespaceId, TypeDeclId, TypeRef, EXPORT_ATTRIBUTE};

/// Name recorded for instance constructors.
const CONSTRUCTOR_NAME: &str = ".ctor";

/// Description of a method to add to a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSpec {
    name: String,
    is_static: bool,
    is_constructor: bool,
    parameters: Vec<Parameter>,
    return_type: TypeRef,
    attributes: Vec<String>,
}

impl MethodSpec {
    /// An instance method returning `void`.
    pub fn method(name: impl Into<String>) -> Self {
        MethodSpec {
            name: name.into(),
            is_static: false,
            is_constructor: false,
            parameters: Vec::new(),
            return_type: TypeRef::VOID,
            attributes: Vec::new(),
        }
    }

    /// An instance constructor. Constructors are never static.
    pub fn constructor() -> Self {
        MethodSpec {
            is_constructor: true,
            ..Self::method(CONSTRUCTOR_NAME)
        }
    }

    #[must_use]
    pub fn static_(mut self) -> Self {
        self.is_static = !self.is_constructor;
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    #[must_use]
    pub fn attribute(mut self, class: impl Into<String>) -> Self {
        self.attributes.push(class.into());
        self
    }

    /// Apply the export marker.
    #[must_use]
    pub fn exported(self) -> Self {
        self.attribute(EXPORT_ATTRIBUTE)
    }
}

/// Builder for [`SymbolModel`].
#[derive(Debug)]
pub struct ModelBuilder {
    assembly: AssemblyIdentity,
    runtime_version: Version,
    namespaces: Vec<Namespace>,
    types: Vec<TypeDecl>,
    methods: Vec<Method>,
    diagnostics: Vec<Diagnostic>,
}

impl ModelBuilder {
    /// Start a model containing only the global namespace.
    pub fn new(assembly: AssemblyIdentity) -> Self {
        ModelBuilder {
            assembly,
            runtime_version: Version::default(),
            namespaces: vec![Namespace {
                name: String::new(),
                parent: None,
                namespaces: Vec::new(),
                types: Vec::new(),
            }],
            types: Vec::new(),
            methods: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn root(&self) -> NamespaceId {
        NamespaceId::ROOT
    }

    pub fn set_runtime_version(&mut self, version: Version) -> &mut Self {
        self.runtime_version = version;
        self
    }

    /// Get or create the child namespace `name` of `parent`.
    ///
    /// Repeated declarations of one namespace merge, as partial namespace
    /// blocks do in source.
    pub fn namespace(&mut self, parent: NamespaceId, name: &str) -> NamespaceId {
        let existing = self.namespaces[parent.index()]
            .namespaces
            .iter()
            .copied()
            .find(|&child| self.namespaces[child.index()].name == name);
        if let Some(id) = existing {
            return id;
        }

        let id = NamespaceId::from_len(self.namespaces.len());
        self.namespaces.push(Namespace {
            name: name.to_string(),
            parent: Some(parent),
            namespaces: Vec::new(),
            types: Vec::new(),
        });
        self.namespaces[parent.index()].namespaces.push(id);
        id
    }

    /// Get or create the namespace chain for a dotted path under the root.
    pub fn namespace_path(&mut self, dotted: &str) -> NamespaceId {
        dotted
            .split('.')
            .filter(|segment| !segment.trim().is_empty())
            .fold(NamespaceId::ROOT, |parent, segment| {
                self.namespace(parent, segment)
            })
    }

    /// Declare a type inside a namespace or as a nested type.
    pub fn add_type(
        &mut self,
        container: impl Into<Container>,
        name: impl Into<String>,
        category: TypeCategory,
    ) -> TypeDeclId {
        let container = container.into();
        let id = TypeDeclId::from_len(self.types.len());
        self.types.push(TypeDecl {
            name: name.into(),
            container,
            category,
            nested: Vec::new(),
            methods: Vec::new(),
            attributes: Vec::new(),
            export_marked: false,
            exported: false,
        });
        match container {
            Container::Namespace(ns) => self.namespaces[ns.index()].types.push(id),
            Container::Type(outer) => self.types[outer.index()].nested.push(id),
        }
        id
    }

    /// Declare a reference-category type.
    pub fn add_class(&mut self, container: impl Into<Container>, name: impl Into<String>) -> TypeDeclId {
        self.add_type(container, name, TypeCategory::Reference)
    }

    /// Apply an attribute to a type or method. Namespaces carry no attributes.
    pub fn add_attribute(&mut self, symbol: Symbol, class: impl Into<String>) {
        match symbol {
            Symbol::Namespace(_) => {}
            Symbol::Type(id) => self.types[id.index()].attributes.push(class.into()),
            Symbol::Method(id) => self.methods[id.index()].attributes.push(class.into()),
        }
    }

    /// Apply the export marker to a type or method.
    pub fn export(&mut self, symbol: Symbol) {
        self.add_attribute(symbol, EXPORT_ATTRIBUTE);
    }

    /// Declare a method on `owner`, in declaration order.
    pub fn add_method(&mut self, owner: TypeDeclId, spec: MethodSpec) -> MethodId {
        let id = MethodId::from_len(self.methods.len());
        self.methods.push(Method {
            name: spec.name,
            declaring_type: owner,
            is_static: spec.is_static && !spec.is_constructor,
            is_constructor: spec.is_constructor,
            parameters: spec.parameters,
            return_type: if spec.is_constructor {
                TypeRef::VOID
            } else {
                spec.return_type
            },
            attributes: spec.attributes,
            exported: false,
        });
        self.types[owner.index()].methods.push(id);
        id
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Derive export flags and freeze the model.
    ///
    /// A type is exported when it carries the marker or declares at least one
    /// marked method. Propagation stops at the type: namespaces and enclosing
    /// types are unaffected. Signature types naming a declared class become
    /// reference types.
    pub fn finish(mut self) -> SymbolModel {
        for method in &mut self.methods {
            method.exported = has_export_marker(&method.attributes);
        }
        for ty in &mut self.types {
            ty.export_marked = has_export_marker(&ty.attributes);
            ty.exported = ty.export_marked
                || ty
                    .methods
                    .iter()
                    .any(|&m| self.methods[m.index()].exported);
        }

        tracing::debug!(
            assembly = %self.assembly.name,
            types = self.types.len(),
            methods = self.methods.len(),
            "symbol model built"
        );

        let mut model = SymbolModel {
            assembly: self.assembly,
            runtime_version: self.runtime_version,
            namespaces: self.namespaces,
            types: self.types,
            methods: self.methods,
            diagnostics: self.diagnostics,
        };
        model.adopt_declared_categories();
        model
    }
}

fn has_export_marker(attributes: &[String]) -> bool {
    attributes.iter().any(|a| a == EXPORT_ATTRIBUTE)
}

#[cfg(test)]
mod tests;
