use tracker_core::model::{Level, ProgressSummary, Status};

use crate::progress_store::ProgressStore;

/// Aggregate progress for a (career, level) task list.
///
/// Purely a read over the store, recomputed on every call so the result
/// always reflects the current store state. Statuses recorded outside the
/// task list's index range do not count.
#[must_use]
pub fn compute_progress(
    store: &ProgressStore,
    career: &str,
    level: Level,
    tasks: &[String],
) -> ProgressSummary {
    let total = tasks.len();
    let mut completed = 0;
    let mut in_progress = 0;
    for index in 0..total {
        match store.status(career, level, index) {
            Status::Completed => completed += 1,
            Status::InProgress => in_progress += 1,
            Status::NotStarted => {}
        }
    }
    ProgressSummary::from_counts(completed, in_progress, total)
}
