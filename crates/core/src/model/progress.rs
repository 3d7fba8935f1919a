/// Aggregated completion counts for one (career, level) task list.
///
/// `not_started` is always derived from the other counts, so the three
/// status counts sum to `total` by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub total: usize,
    /// Completion percentage in `[0.0, 100.0]`; `0.0` when `total` is zero.
    /// Callers decide rounding and formatting.
    pub percentage: f64,
}

impl ProgressSummary {
    /// Builds a summary from counted statuses.
    ///
    /// Counts are clamped so `completed + in_progress` never exceeds `total`.
    #[must_use]
    pub fn from_counts(completed: usize, in_progress: usize, total: usize) -> Self {
        let completed = completed.min(total);
        let in_progress = in_progress.min(total - completed);
        let not_started = total - completed - in_progress;
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Self {
            completed,
            in_progress,
            not_started,
            total,
            percentage,
        }
    }

    /// True once every task in a non-empty list is completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
