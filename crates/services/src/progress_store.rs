use std::collections::HashMap;

use tracker_core::model::{Level, Status, TaskKey};

/// Per-session store of task statuses.
///
/// Entries are created on first write; a task that was never written reads
/// as `Status::NotStarted`. The store lives and dies with its session;
/// there is no persistence.
#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    entries: HashMap<TaskKey, Status>,
}

impl ProgressStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of the task at `index` in the (career, level) roadmap.
    ///
    /// Never fails: an unset task is `NotStarted`.
    #[must_use]
    pub fn status(&self, career: &str, level: Level, index: usize) -> Status {
        self.entries
            .get(&TaskKey::new(career, level, index))
            .copied()
            .unwrap_or_default()
    }

    /// Records `status` for the task at `index`, overwriting any prior
    /// entry.
    ///
    /// There is no delete: a task goes back to `NotStarted` only by storing
    /// `Status::NotStarted` explicitly.
    pub fn set_status(&mut self, career: &str, level: Level, index: usize, status: Status) {
        self.entries
            .insert(TaskKey::new(career, level, index), status);
    }

    /// Number of explicitly recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True while no status has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_task_reads_not_started() {
        let store = ProgressStore::new();
        assert_eq!(
            store.status("Data Scientist", Level::Beginner, 0),
            Status::NotStarted
        );
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get_returns_new_status_regardless_of_prior() {
        let mut store = ProgressStore::new();
        for status in Status::ALL {
            store.set_status("Data Scientist", Level::Beginner, 0, status);
            assert_eq!(store.status("Data Scientist", Level::Beginner, 0), status);
        }
    }

    #[test]
    fn setting_the_same_status_twice_is_idempotent() {
        let mut store = ProgressStore::new();
        store.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);
        store.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.status("Data Scientist", Level::Beginner, 0),
            Status::Completed
        );
    }

    #[test]
    fn distinct_triples_never_alias() {
        let mut store = ProgressStore::new();
        store.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);

        assert_eq!(
            store.status("Data Scientist", Level::Beginner, 1),
            Status::NotStarted
        );
        assert_eq!(
            store.status("Data Scientist", Level::Advanced, 0),
            Status::NotStarted
        );
        assert_eq!(
            store.status("Web Developer", Level::Beginner, 0),
            Status::NotStarted
        );
    }

    #[test]
    fn explicit_not_started_is_the_only_way_back() {
        let mut store = ProgressStore::new();
        store.set_status("Data Scientist", Level::Beginner, 0, Status::InProgress);
        store.set_status("Data Scientist", Level::Beginner, 0, Status::NotStarted);
        assert_eq!(
            store.status("Data Scientist", Level::Beginner, 0),
            Status::NotStarted
        );
        // The entry stays; absence and explicit NotStarted read the same.
        assert_eq!(store.len(), 1);
    }
}
