//! The immutable symbol snapshot.

use std::fmt;
use std::str::FromStr;

use nx_diagnostic::{Diagnostic, DiagnosticCounts};
use thiserror::Error;

use crate::{MethodId, NamespaceId, TypeDeclId, TypeRef};

/// Three-component version, `major.minor.build`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Version {
            major,
            minor,
            build,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// A version string that is not two to four numeric components.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid version `{0}`")]
pub struct VersionParseError(String);

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses two to four dot-separated components. A missing build component
    /// is zero and a fourth (revision) component is discarded.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionParseError(text.to_string());
        let parts = text
            .trim()
            .split('.')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match parts[..] {
            [major, minor] => Ok(Version::new(major, minor, 0)),
            [major, minor, build] | [major, minor, build, _] => {
                Ok(Version::new(major, minor, build))
            }
            _ => Err(invalid()),
        }
    }
}

/// Identity of the analyzed assembly.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AssemblyIdentity {
    pub name: String,
    pub version: Version,
}

impl AssemblyIdentity {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        AssemblyIdentity {
            name: name.into(),
            version,
        }
    }
}

/// Renders the runtime's assembly display name, as accepted by type lookup.
impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Version={}.0, Culture=neutral, PublicKeyToken=null",
            self.name, self.version
        )
    }
}

/// A namespace node. The global namespace has an empty name and no parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    pub parent: Option<NamespaceId>,
    pub namespaces: Vec<NamespaceId>,
    pub types: Vec<TypeDeclId>,
}

/// What directly contains a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Namespace(NamespaceId),
    Type(TypeDeclId),
}

impl From<NamespaceId> for Container {
    fn from(id: NamespaceId) -> Self {
        Container::Namespace(id)
    }
}

impl From<TypeDeclId> for Container {
    fn from(id: TypeDeclId) -> Self {
        Container::Type(id)
    }
}

/// Whether instances are managed objects or plain values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TypeCategory {
    #[default]
    Reference,
    Value,
}

/// A declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub container: Container,
    pub category: TypeCategory,
    pub nested: Vec<TypeDeclId>,
    pub methods: Vec<MethodId>,
    pub attributes: Vec<String>,
    /// Carries the export marker directly.
    pub export_marked: bool,
    /// Marked directly, or declares at least one exported method.
    pub exported: bool,
}

/// A declared method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Parameter {
            name: name.into(),
            ty,
        }
    }
}

/// A declared method or instance constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub declaring_type: TypeDeclId,
    pub is_static: bool,
    pub is_constructor: bool,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    pub attributes: Vec<String>,
    /// Carries the export marker; methods have no other way to be exported.
    pub exported: bool,
}

impl Method {
    /// Instance methods receive the object handle as a leading argument.
    /// Constructors produce the handle instead.
    pub fn takes_handle(&self) -> bool {
        !self.is_static && !self.is_constructor
    }
}

/// Any symbol that can appear on a containment chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Namespace(NamespaceId),
    Type(TypeDeclId),
    Method(MethodId),
}

impl From<Container> for Symbol {
    fn from(container: Container) -> Self {
        match container {
            Container::Namespace(id) => Symbol::Namespace(id),
            Container::Type(id) => Symbol::Type(id),
        }
    }
}

/// Immutable snapshot of an analyzed assembly.
///
/// Built once per run by [`ModelBuilder`](crate::ModelBuilder) and then only
/// queried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolModel {
    pub(crate) assembly: AssemblyIdentity,
    pub(crate) runtime_version: Version,
    pub(crate) namespaces: Vec<Namespace>,
    pub(crate) types: Vec<TypeDecl>,
    pub(crate) methods: Vec<Method>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl SymbolModel {
    pub fn assembly(&self) -> &AssemblyIdentity {
        &self.assembly
    }

    /// Version of the core library the project compiles against.
    pub fn runtime_version(&self) -> Version {
        self.runtime_version
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        DiagnosticCounts::tally(&self.diagnostics).has_errors()
    }

    pub fn root(&self) -> NamespaceId {
        NamespaceId::ROOT
    }

    #[inline]
    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.index()]
    }

    #[inline]
    pub fn type_decl(&self, id: TypeDeclId) -> &TypeDecl {
        &self.types[id.index()]
    }

    #[inline]
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    /// Name of any symbol. Empty for the global namespace.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::Namespace(id) => &self.namespace(id).name,
            Symbol::Type(id) => &self.type_decl(id).name,
            Symbol::Method(id) => &self.method(id).name,
        }
    }

    /// The symbol that directly contains `symbol`; `None` for the global namespace.
    pub fn container(&self, symbol: Symbol) -> Option<Symbol> {
        match symbol {
            Symbol::Namespace(id) => self.namespace(id).parent.map(Symbol::Namespace),
            Symbol::Type(id) => Some(self.type_decl(id).container.into()),
            Symbol::Method(id) => Some(Symbol::Type(self.method(id).declaring_type)),
        }
    }

    /// The nearest enclosing namespace of a type, skipping enclosing types.
    pub fn namespace_of(&self, id: TypeDeclId) -> NamespaceId {
        let mut container = self.type_decl(id).container;
        loop {
            match container {
                Container::Namespace(ns) => return ns,
                Container::Type(outer) => container = self.type_decl(outer).container,
            }
        }
    }

    /// Attribute class names applied to a symbol, in source order.
    pub fn attributes(&self, symbol: Symbol) -> &[String] {
        match symbol {
            Symbol::Namespace(_) => &[],
            Symbol::Type(id) => &self.type_decl(id).attributes,
            Symbol::Method(id) => &self.method(id).attributes,
        }
    }

    /// Find a top-level or nested type by dotted name, e.g. `Demo.Outer.Inner`.
    pub fn find_type(&self, dotted: &str) -> Option<TypeDeclId> {
        let mut segments = dotted.split('.').filter(|s| !s.is_empty()).peekable();
        let mut ns = self.root();
        let mut current: Option<TypeDeclId> = None;

        while let Some(segment) = segments.next() {
            let candidates: &[TypeDeclId] = match current {
                Some(ty) => &self.type_decl(ty).nested,
                None => {
                    // Namespaces shadow types of the same name while descending.
                    let child = self
                        .namespace(ns)
                        .namespaces
                        .iter()
                        .copied()
                        .find(|&child| self.namespace(child).name == segment);
                    if let (Some(child), Some(_)) = (child, segments.peek()) {
                        ns = child;
                        continue;
                    }
                    &self.namespace(ns).types
                }
            };
            current = Some(
                candidates
                    .iter()
                    .copied()
                    .find(|&ty| self.type_decl(ty).name == segment)?,
            );
        }

        current
    }

    /// Rewrite signature types that name a reference type declared in this
    /// model. Snapshot text cannot tell `Demo.Widget` the class apart from a
    /// struct; the declaration decides.
    pub(crate) fn adopt_declared_categories(&mut self) {
        let mut methods = std::mem::take(&mut self.methods);
        for method in &mut methods {
            self.adopt_category(&mut method.return_type);
            for parameter in &mut method.parameters {
                self.adopt_category(&mut parameter.ty);
            }
        }
        self.methods = methods;
    }

    fn adopt_category(&self, ty: &mut TypeRef) {
        let TypeRef::Value(path) = ty else {
            return;
        };
        let declared = self
            .find_type(&path.join("."))
            .map(|id| self.type_decl(id).category);
        if declared == Some(TypeCategory::Reference) {
            *ty = TypeRef::Reference(path.clone());
        }
    }

    /// Number of declared types, nested ones included.
    #[cfg(test)]
    pub(crate) fn type_count(&self) -> usize {
        self.types.len()
    }
}
