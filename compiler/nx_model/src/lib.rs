//! Symbol Model - immutable snapshot of an analyzed managed assembly.
//!
//! The semantic-analysis engine that produces symbols lives outside this
//! workspace. This crate is the narrow interface the generator consumes:
//! - Namespaces, types, methods and parameters in declaration order
//! - Attribute annotations, with export-marker presence computed once
//! - Assembly identity and the runtime (core library) version
//! - Compile diagnostics
//!
//! # Design
//!
//! - **Flat storage**: symbols live in per-kind vectors addressed by `u32` ids
//! - **Build once**: [`ModelBuilder::finish`] derives every flag; a
//!   [`SymbolModel`] is never mutated afterwards
//! - **Pluggable sources**: [`SymbolSource`] hides where the snapshot comes
//!   from (a JSON snapshot on disk, or an in-memory fixture)

mod builder;
mod error;
mod id;
mod model;
mod observe;
pub mod source;
mod type_ref;

pub use builder::{MethodSpec, ModelBuilder};
pub use error::LoadError;
pub use id::{MethodId, NamespaceId, TypeDeclId};
pub use model::{
    AssemblyIdentity, Container, Method, Namespace, Parameter, Symbol, SymbolModel, TypeCategory,
    TypeDecl, Version, VersionParseError,
};
pub use observe::{observe, NoopObserver, Observer};
pub use source::{FixtureSource, SnapshotSource, SymbolSource};
pub use type_ref::{PrimitiveKind, QualifiedPath, TypeRef, TypeRefParseError};

/// Fully qualified name of the attribute that selects a symbol for export.
pub const EXPORT_ATTRIBUTE: &str = "NativeExposer.ExportAttribute";

/// Fully qualified name of the runtime support type holding the deallocation hook.
pub const INTERNAL_TYPE: &str = "NativeExposer.Internal";

/// Name of the deallocation hook on [`INTERNAL_TYPE`].
pub const FREE_METHOD: &str = "Free";
