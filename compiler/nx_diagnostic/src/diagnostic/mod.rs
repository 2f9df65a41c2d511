//! Core diagnostic types.
//!
//! Rendering follows the analyzer's own single-line format so that editors and
//! CI log scrapers recognise it:
//!
//! ```text
//! src/Foo.cs(12,9): warning CS0168: The variable 'e' is declared but never used
//! ```

use std::fmt;

use serde::Deserialize;

/// Severity level for diagnostics, ordered from least to most severe.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Never shown to the user.
    Hidden,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position in an analyzed source file. Lines and columns are 1-based.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
pub struct Location {
    pub path: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(path: impl Into<String>, line: u32, column: u32) -> Self {
        Location {
            path: path.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.path, self.line, self.column)
    }
}

/// A single compile diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Analyzer-assigned identifier, e.g. `CS0246`.
    pub id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(severity: Severity, id: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            id: id.into(),
            severity,
            message: message.into(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, id, message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, id, message)
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_hidden(&self) -> bool {
        self.severity == Severity::Hidden
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(f, "{} {}: {}", self.severity, self.id, self.message)
    }
}

/// Error and warning tallies over a set of diagnostics.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct DiagnosticCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl DiagnosticCounts {
    pub fn tally<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Self {
        let mut counts = DiagnosticCounts::default();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Hidden | Severity::Info => {}
            }
        }
        counts
    }

    pub fn has_errors(self) -> bool {
        self.errors > 0
    }
}

#[cfg(test)]
mod tests;
