//! Errors raised while acquiring a symbol snapshot.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::TypeRefParseError;

/// Failure to load a project's symbol snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed symbol snapshot '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid type `{text}` in {context}: {source}")]
    TypeRef {
        context: String,
        text: String,
        #[source]
        source: TypeRefParseError,
    },

    #[error("invalid version `{text}` in {context}")]
    Version { context: String, text: String },

    #[error("method without a name in type `{type_name}`")]
    UnnamedMethod { type_name: String },
}
