//! JSON symbol snapshots written by the external analyzer.
//!
//! ```json
//! {
//!   "assembly": { "name": "Demo", "version": "1.0.0" },
//!   "runtime_version": "8.0.0",
//!   "namespaces": [
//!     { "name": "Demo.Shapes", "types": [
//!       { "name": "Circle", "kind": "class", "methods": [
//!         { "constructor": true, "parameters": [{ "name": "r", "type": "System.Double" }],
//!           "attributes": ["NativeExposer.ExportAttribute"] }
//!       ] }
//!     ] }
//!   ],
//!   "diagnostics": [
//!     { "id": "CS0168", "severity": "warning", "message": "unused variable" }
//!   ]
//! }
//! ```
//!
//! Namespace names may be dotted; repeated namespaces merge. Type references
//! use the textual form accepted by [`TypeRef`]'s `FromStr`; a bare name that
//! matches a type declared with `"kind": "class"` is a reference type.

use std::fs;
use std::path::{Path, PathBuf};

use nx_diagnostic::Diagnostic;
use serde::Deserialize;

use crate::{
    observe, AssemblyIdentity, Container, LoadError, MethodSpec, ModelBuilder, NamespaceId,
    Observer, Symbol, SymbolModel, SymbolSource, TypeCategory, TypeRef, Version,
};

/// File name looked up when the project path is a directory.
pub const SNAPSHOT_FILE_NAME: &str = "symbols.json";

/// Reads a snapshot from disk.
#[derive(Clone, Debug)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    /// `path` names either the snapshot file or a directory holding
    /// [`SNAPSHOT_FILE_NAME`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotSource { path: path.into() }
    }

    /// The file that will actually be read.
    pub fn snapshot_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(SNAPSHOT_FILE_NAME)
        } else {
            self.path.clone()
        }
    }
}

impl SymbolSource for SnapshotSource {
    #[tracing::instrument(level = "debug", skip_all, fields(path = %self.path.display()))]
    fn load(&self, observer: &mut dyn Observer) -> Result<SymbolModel, LoadError> {
        let path = self.snapshot_path();
        let file_name = display_name(&path);

        let text = observe(observer, &format!("read {file_name}"), || {
            fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })
        })?;

        let snapshot: SnapshotFile = observe(observer, &format!("parse {file_name}"), || {
            serde_json::from_str(&text).map_err(|source| LoadError::Json {
                path: path.clone(),
                source,
            })
        })?;

        let title = format!("resolve {}", snapshot.assembly.name);
        observe(observer, &title, || resolve(snapshot))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotFile {
    assembly: AssemblyEntry,
    #[serde(default)]
    runtime_version: Option<String>,
    #[serde(default)]
    namespaces: Vec<NamespaceEntry>,
    /// Types declared in the global namespace.
    #[serde(default)]
    types: Vec<TypeEntry>,
    #[serde(default)]
    diagnostics: Vec<Diagnostic>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AssemblyEntry {
    name: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    "0.0.0".to_string()
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NamespaceEntry {
    name: String,
    #[serde(default)]
    namespaces: Vec<NamespaceEntry>,
    #[serde(default)]
    types: Vec<TypeEntry>,
}

#[derive(Copy, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
enum TypeKind {
    #[default]
    Class,
    Interface,
    Delegate,
    Struct,
    Enum,
}

impl TypeKind {
    fn category(self) -> TypeCategory {
        match self {
            TypeKind::Class | TypeKind::Interface | TypeKind::Delegate => TypeCategory::Reference,
            TypeKind::Struct | TypeKind::Enum => TypeCategory::Value,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    #[serde(default)]
    kind: TypeKind,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    methods: Vec<MethodEntry>,
    /// Nested types.
    #[serde(default)]
    types: Vec<TypeEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MethodEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "static")]
    is_static: bool,
    #[serde(default)]
    constructor: bool,
    #[serde(default)]
    returns: Option<String>,
    #[serde(default)]
    parameters: Vec<ParameterEntry>,
    #[serde(default)]
    attributes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ParameterEntry {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

fn parse_version(text: &str, context: &str) -> Result<Version, LoadError> {
    text.parse().map_err(|_| LoadError::Version {
        context: context.to_string(),
        text: text.to_string(),
    })
}

fn parse_type(text: &str, context: impl FnOnce() -> String) -> Result<TypeRef, LoadError> {
    text.parse().map_err(|source| LoadError::TypeRef {
        context: context(),
        text: text.to_string(),
        source,
    })
}

fn resolve(snapshot: SnapshotFile) -> Result<SymbolModel, LoadError> {
    let version = parse_version(&snapshot.assembly.version, "assembly version")?;
    let mut builder = ModelBuilder::new(AssemblyIdentity::new(snapshot.assembly.name, version));

    if let Some(runtime) = &snapshot.runtime_version {
        builder.set_runtime_version(parse_version(runtime, "runtime version")?);
    }

    let root = builder.root();
    for ty in &snapshot.types {
        add_type(&mut builder, root.into(), "", ty)?;
    }
    for ns in &snapshot.namespaces {
        add_namespace(&mut builder, root, "", ns)?;
    }
    for diagnostic in snapshot.diagnostics {
        builder.add_diagnostic(diagnostic);
    }

    Ok(builder.finish())
}

fn add_namespace(
    builder: &mut ModelBuilder,
    parent: NamespaceId,
    parent_path: &str,
    entry: &NamespaceEntry,
) -> Result<(), LoadError> {
    let ns = entry
        .name
        .split('.')
        .filter(|segment| !segment.trim().is_empty())
        .fold(parent, |ns, segment| builder.namespace(ns, segment));
    let path = join_path(parent_path, &entry.name);

    for ty in &entry.types {
        add_type(builder, ns.into(), &path, ty)?;
    }
    for child in &entry.namespaces {
        add_namespace(builder, ns, &path, child)?;
    }
    Ok(())
}

fn add_type(
    builder: &mut ModelBuilder,
    container: Container,
    parent_path: &str,
    entry: &TypeEntry,
) -> Result<(), LoadError> {
    let id = builder.add_type(container, entry.name.as_str(), entry.kind.category());
    let path = join_path(parent_path, &entry.name);

    for attribute in &entry.attributes {
        builder.add_attribute(Symbol::Type(id), attribute.as_str());
    }

    for method in &entry.methods {
        let spec = method_spec(&path, method)?;
        builder.add_method(id, spec);
    }

    for nested in &entry.types {
        add_type(builder, id.into(), &path, nested)?;
    }
    Ok(())
}

fn method_spec(type_path: &str, entry: &MethodEntry) -> Result<MethodSpec, LoadError> {
    let mut spec = match (&entry.name, entry.constructor) {
        (_, true) => MethodSpec::constructor(),
        (Some(name), false) => MethodSpec::method(name.as_str()),
        (None, false) => {
            return Err(LoadError::UnnamedMethod {
                type_name: type_path.to_string(),
            })
        }
    };
    let method_name = entry.name.as_deref().unwrap_or(".ctor");

    if entry.is_static {
        spec = spec.static_();
    }
    if let Some(returns) = &entry.returns {
        let ty = parse_type(returns, || {
            format!("return type of `{type_path}.{method_name}`")
        })?;
        spec = spec.returns(ty);
    }
    for param in &entry.parameters {
        let ty = parse_type(&param.ty, || {
            format!("parameter `{}` of `{type_path}.{method_name}`", param.name)
        })?;
        spec = spec.param(param.name.as_str(), ty);
    }
    for attribute in &entry.attributes {
        spec = spec.attribute(attribute.as_str());
    }
    Ok(spec)
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}
