//! Native binding generator.
//!
//! Turns a [`SymbolModel`] into the three artifacts a native consumer builds
//! against:
//!
//! ```text
//! SymbolModel
//!      ↓
//!  ExportPlan::validate   (deallocation hook, mangling collisions)
//!      ↓
//!  HeaderEmitter          → lib.h
//!  SourceEmitter          → lib.cxx
//!  BuildDescriptorEmitter → CMakeLists.txt
//! ```
//!
//! Every stage is a pure function of the model; running generation twice
//! over one snapshot yields byte-identical output.

mod build;
mod context;
mod cpp;
mod error;
mod mangle;
pub mod names;
mod runtime;
pub mod select;
mod types;
mod validate;

#[cfg(test)]
mod test_helpers;

pub use build::{sanitize, BuildDescriptorEmitter};
pub use context::CodegenContext;
pub use cpp::{HeaderEmitter, SourceEmitter};
pub use error::CodegenError;
pub use mangle::{Mangler, MANGLE_PREFIX};
pub use types::{CppTypeMapper, HANDLE_TYPE};
pub use validate::ExportPlan;

use nx_model::{observe, Observer, SymbolModel};

/// One generated file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    Header,
    Source,
    BuildDescriptor,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Header, Artifact::Source, Artifact::BuildDescriptor];

    /// File name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Header => "lib.h",
            Artifact::Source => "lib.cxx",
            Artifact::BuildDescriptor => "CMakeLists.txt",
        }
    }

    /// Progress title reported while the artifact is rendered.
    pub fn title(self) -> &'static str {
        match self {
            Artifact::Header => "generate header",
            Artifact::Source => "generate source",
            Artifact::BuildDescriptor => "generate CMakeLists.txt",
        }
    }
}

/// Rendered text of every artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub source: String,
    pub build_descriptor: String,
}

impl Artifacts {
    pub fn get(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Header => &self.header,
            Artifact::Source => &self.source,
            Artifact::BuildDescriptor => &self.build_descriptor,
        }
    }
}

/// Validate the export surface, then render all artifacts.
///
/// Nothing is rendered when validation fails.
pub fn generate(
    model: &SymbolModel,
    observer: &mut dyn Observer,
) -> Result<Artifacts, CodegenError> {
    let plan = observe(observer, "validate exports", || ExportPlan::validate(model))?;

    let header = observe(observer, Artifact::Header.title(), || HeaderEmitter::emit(model));
    let source = observe(observer, Artifact::Source.title(), || SourceEmitter::emit(&plan));
    let build_descriptor = observe(observer, Artifact::BuildDescriptor.title(), || {
        BuildDescriptorEmitter::emit(model)
    });

    Ok(Artifacts {
        header,
        source,
        build_descriptor,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
