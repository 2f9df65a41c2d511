//! Errors that end a generation run.

use std::io;
use std::path::PathBuf;

use nx_codegen::CodegenError;
use nx_model::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The symbol snapshot could not be acquired.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The analyzer reported error diagnostics; they have already been printed.
    #[error("failed to compile project")]
    Compile { errors: usize },

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("could not create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
