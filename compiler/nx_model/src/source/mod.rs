//! Where symbol snapshots come from.
//!
//! [`SymbolSource`] is the only seam between the generator and the
//! semantic-analysis engine. Two implementations ship with the crate:
//! - [`SnapshotSource`] reads the JSON snapshot an analyzer writes next to a project
//! - [`FixtureSource`] hands out a model assembled in memory

mod snapshot;

pub use snapshot::{SnapshotSource, SNAPSHOT_FILE_NAME};

use crate::{LoadError, Observer, SymbolModel};

/// A provider of symbol snapshots.
pub trait SymbolSource {
    /// Acquire the snapshot. May block for a long time; progress is reported
    /// through `observer`.
    fn load(&self, observer: &mut dyn Observer) -> Result<SymbolModel, LoadError>;
}

/// Source backed by an already-built model.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    model: SymbolModel,
}

impl FixtureSource {
    pub fn new(model: SymbolModel) -> Self {
        FixtureSource { model }
    }
}

impl SymbolSource for FixtureSource {
    fn load(&self, _observer: &mut dyn Observer) -> Result<SymbolModel, LoadError> {
        Ok(self.model.clone())
    }
}
