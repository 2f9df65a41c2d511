//! Diagnostics reported by the semantic-analysis collaborator.
//!
//! The analyzer attaches a list of [`Diagnostic`]s to every symbol snapshot.
//! Generation is gated on them:
//! - `hidden` diagnostics are never shown
//! - `info` and `warning` diagnostics are shown and generation continues
//! - `error` diagnostics are shown and generation aborts before any output
//!
//! Message text comes from the analyzer and is surfaced verbatim.

mod diagnostic;
pub mod emitter;

pub use diagnostic::{Diagnostic, DiagnosticCounts, Location, Severity};
