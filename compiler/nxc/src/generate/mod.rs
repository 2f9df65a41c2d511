//! The generation pipeline.
//!
//! ```text
//! SymbolSource::load → diagnostic gate → nx_codegen::generate → write files
//! ```
//!
//! Nothing is written unless every earlier step succeeds. Re-running over an
//! unchanged snapshot rewrites identical files.

use std::fs;
use std::path::{Path, PathBuf};

use nx_codegen::{Artifact, Artifacts};
use nx_diagnostic::emitter::DiagnosticEmitter;
use nx_diagnostic::DiagnosticCounts;
use nx_model::{Observer, SymbolSource};

use crate::GenerateError;

/// Generate bindings for the snapshot behind `source` into `output_dir`.
///
/// Non-hidden diagnostics go to `emitter`; any error diagnostic aborts the
/// run. Returns the paths written, in artifact order.
#[tracing::instrument(level = "debug", skip_all, fields(output = %output_dir.display()))]
pub fn generate(
    source: &dyn SymbolSource,
    output_dir: &Path,
    emitter: &mut dyn DiagnosticEmitter,
    observer: &mut dyn Observer,
) -> Result<Vec<PathBuf>, GenerateError> {
    let model = source.load(observer)?;

    let diagnostics = model.diagnostics();
    let counts = DiagnosticCounts::tally(diagnostics);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(counts.errors, counts.warnings);
    emitter.flush();
    if counts.has_errors() {
        return Err(GenerateError::Compile {
            errors: counts.errors,
        });
    }

    let artifacts = nx_codegen::generate(&model, observer)?;
    write_artifacts(output_dir, &artifacts)
}

/// Create `output_dir` if needed and write every artifact into it.
pub fn write_artifacts(
    output_dir: &Path,
    artifacts: &Artifacts,
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(Artifact::ALL.len());
    for artifact in Artifact::ALL {
        let path = output_dir.join(artifact.file_name());
        fs::write(&path, artifacts.get(artifact)).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
