//! Native exposer driver.
//!
//! Library half of the `nxc` binary: argument parsing, the generation
//! pipeline, progress reporting and logging setup. Everything here is
//! callable from tests without spawning a process.

pub mod error;
pub mod generate;
mod logging;
pub mod options;
pub mod progress;

pub use error::GenerateError;
pub use generate::{generate, write_artifacts};
pub use logging::init_tracing;
pub use options::{Command, Options, UsageError, USAGE};
pub use progress::{format_elapsed, ProgressReporter};
