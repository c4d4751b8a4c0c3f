use tracing::debug;

use crate::models::{Day, Schedule};
use crate::schedule::default_schedule;
use crate::storage::Storage;

/// Session state: the live schedule plus which day card is expanded.
///
/// All mutation goes through the operations below; every successful
/// schedule mutation is written straight back to storage. The expansion
/// selection is deliberately ephemeral and never persisted.
pub struct RoutineState {
    schedule: Schedule,
    expanded: Option<String>,
    storage: Storage,
}

impl RoutineState {
    /// Hydrates from storage; nothing is expanded at startup.
    pub fn load(storage: Storage) -> Self {
        RoutineState {
            schedule: storage.load(),
            expanded: None,
            storage,
        }
    }

    pub fn schedule(&self) -> &[Day] {
        &self.schedule
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Flips one exercise's completed flag and persists. An unknown day id
    /// or out-of-range index is ignored; the UI only hands out addresses it
    /// rendered, so anything else is a bug worth a log line, not a crash.
    pub fn toggle_exercise(&mut self, day_id: &str, index: usize) {
        let Some(exercise) = self
            .schedule
            .iter_mut()
            .find(|day| day.id == day_id)
            .and_then(|day| day.exercises.get_mut(index))
        else {
            debug!("ignoring toggle for unknown target {day_id}/{index}");
            return;
        };
        exercise.completed = !exercise.completed;
        self.storage.save(&self.schedule);
    }

    /// Replaces the schedule with the built-in week and collapses the
    /// expanded card, but only if the confirmation gate says yes. A
    /// declined gate leaves everything untouched, including storage.
    pub fn reset_week(&mut self, confirm: impl FnOnce() -> bool) {
        if !confirm() {
            return;
        }
        self.schedule = default_schedule();
        self.expanded = None;
        self.storage.save(&self.schedule);
    }

    /// Expands the given day, collapsing whichever one was open before;
    /// selecting the already-open day collapses it. UI state only, so no
    /// storage write.
    pub fn toggle_day_expand(&mut self, day_id: &str) {
        if self.expanded.as_deref() == Some(day_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(day_id.to_string());
        }
    }
}
