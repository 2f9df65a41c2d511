//! Generation invariant violations.

use thiserror::Error;

/// The export surface cannot be generated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodegenError {
    #[error("deallocation hook `{type_name}.{method}` is not declared")]
    MissingDeallocationHook {
        type_name: &'static str,
        method: &'static str,
    },

    #[error("deallocation hook `{type_name}.{method}` is declared {count} times")]
    AmbiguousDeallocationHook {
        type_name: &'static str,
        method: &'static str,
        count: usize,
    },

    #[error("deallocation hook `{signature}` must take exactly one object handle")]
    InvalidDeallocationHook { signature: String },

    #[error(
        "exported methods `{first}` and `{second}` of `{type_name}` both mangle to `{symbol}`"
    )]
    ManglingCollision {
        type_name: String,
        symbol: String,
        first: String,
        second: String,
    },
}
