use tracker_core::Clock;
use tracker_core::model::{Level, ProgressSummary, RoadmapCatalog, SessionId, Status};

use crate::error::TrackerError;
use crate::progress_store::ProgressStore;

use super::progress::compute_progress;
use super::session::{ActiveTriple, TrackerMode, TrackerSession};

/// Owns the mutable state of one tracker session: the status store plus the
/// active configuration.
///
/// Constructed explicitly and handed to every consumer; nothing in here is
/// ambient or lazily initialized. Each hosting session gets its own
/// context, since sharing one across sessions is a correctness bug, not a
/// supported mode.
#[derive(Debug, Clone)]
pub struct TrackerContext {
    id: SessionId,
    clock: Clock,
    session: TrackerSession,
    store: ProgressStore,
}

impl TrackerContext {
    /// Creates a fresh context with an empty store and an unconfigured
    /// session.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            id: SessionId::new(),
            clock,
            session: TrackerSession::new(clock.now()),
            store: ProgressStore::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn session(&self) -> &TrackerSession {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Sets the active triple from the hosting caller.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidConfiguration` when `career` is blank.
    pub fn configure(
        &mut self,
        career: impl Into<String>,
        level: Level,
        tasks: Vec<String>,
    ) -> Result<&ActiveTriple, TrackerError> {
        let now = self.clock.now();
        self.session.configure(career, level, tasks, now)
    }

    /// Self-selects a career roadmap out of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CareerNotFound` when no entry matches
    /// `career_name` exactly.
    pub fn select_from_catalog(
        &mut self,
        catalog: &RoadmapCatalog,
        career_name: &str,
        level: Level,
    ) -> Result<&ActiveTriple, TrackerError> {
        let now = self.clock.now();
        self.session
            .select_from_catalog(catalog, career_name, level, now)
    }

    /// The active triple, or `None` while unconfigured.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveTriple> {
        self.session.active()
    }

    /// How the active triple was chosen, or `None` while unconfigured.
    #[must_use]
    pub fn mode(&self) -> Option<TrackerMode> {
        self.session.mode()
    }

    /// Status of the task at `index`; `NotStarted` when never set.
    #[must_use]
    pub fn status(&self, career: &str, level: Level, index: usize) -> Status {
        self.store.status(career, level, index)
    }

    /// Records a status for the task at `index`.
    pub fn set_status(&mut self, career: &str, level: Level, index: usize, status: Status) {
        self.store.set_status(career, level, index, status);
    }

    /// Aggregate progress for an arbitrary (career, level, tasks) view.
    #[must_use]
    pub fn progress(&self, career: &str, level: Level, tasks: &[String]) -> ProgressSummary {
        compute_progress(&self.store, career, level, tasks)
    }

    /// Aggregate progress for the active triple, or `None` while
    /// unconfigured.
    #[must_use]
    pub fn active_progress(&self) -> Option<ProgressSummary> {
        self.session.active().map(|triple| {
            compute_progress(&self.store, triple.career(), triple.level(), triple.tasks())
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::time::fixed_now;

    fn context() -> TrackerContext {
        TrackerContext::new(Clock::fixed(fixed_now()))
    }

    #[test]
    fn session_timestamps_come_from_the_injected_clock() {
        let ctx = context();
        assert_eq!(ctx.session().started_at(), fixed_now());
    }

    #[test]
    fn active_progress_is_none_while_unconfigured() {
        let ctx = context();
        assert!(ctx.active().is_none());
        assert!(ctx.active_progress().is_none());
    }

    #[test]
    fn configure_update_and_aggregate() {
        let mut ctx = context();
        ctx.configure(
            "Data Scientist",
            Level::Beginner,
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        )
        .unwrap();

        ctx.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);
        ctx.set_status("Data Scientist", Level::Beginner, 1, Status::InProgress);

        let progress = ctx.active_progress().unwrap();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.not_started, 1);
        assert_eq!(progress.total, 3);
        assert!((progress.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn statuses_survive_reconfiguration() {
        let mut ctx = context();
        let tasks = vec!["A".to_string(), "B".to_string()];
        ctx.configure("Data Scientist", Level::Beginner, tasks.clone())
            .unwrap();
        ctx.set_status("Data Scientist", Level::Beginner, 0, Status::Completed);

        // Keys embed the triple, not the session, so switching away and
        // back preserves recorded progress.
        ctx.configure("Web Developer", Level::Beginner, vec!["X".to_string()])
            .unwrap();
        ctx.configure("Data Scientist", Level::Beginner, tasks)
            .unwrap();

        let progress = ctx.active_progress().unwrap();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 2);
    }
}
