//! Diagnostic Emitters
//!
//! Emitters render [`Diagnostic`]s for a human reader. Hidden diagnostics are
//! filtered here so callers can hand over the analyzer's full list.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit every non-hidden diagnostic in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics.iter().filter(|d| !d.is_hidden()) {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a one-line summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
