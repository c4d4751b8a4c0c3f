use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Schedule;
use crate::schedule::default_schedule;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access schedule file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode schedule: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persists the schedule as one pretty-printed JSON file.
///
/// Failures never leave this adapter: a load problem falls back to the
/// built-in week, a save problem is logged and the in-memory state stays
/// authoritative.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    /// Missing, unreadable, malformed, or structurally incompatible saved
    /// state is all treated the same way: as no saved state.
    pub fn load(&self) -> Schedule {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("no saved schedule at {}: {err}", self.path.display());
                return default_schedule();
            }
        };
        match serde_json::from_str::<Schedule>(&raw) {
            Ok(saved) if same_week_shape(&saved) => saved,
            Ok(_) => {
                warn!(
                    "saved schedule at {} does not match the built-in week, using defaults",
                    self.path.display()
                );
                default_schedule()
            }
            Err(err) => {
                warn!("could not parse saved schedule: {err}, using defaults");
                default_schedule()
            }
        }
    }

    pub fn save(&self, schedule: &Schedule) {
        if let Err(err) = self.try_save(schedule) {
            warn!("could not persist schedule: {err}");
        }
    }

    fn try_save(&self, schedule: &Schedule) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(schedule)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// A usable saved schedule carries the seed's day ids in the seed's order;
/// only completion flags may differ between sessions.
fn same_week_shape(saved: &Schedule) -> bool {
    let seed = default_schedule();
    saved.len() == seed.len() && saved.iter().zip(&seed).all(|(a, b)| a.id == b.id)
}
