use chrono::{DateTime, Utc};

use tracker_core::model::{Level, RoadmapCatalog};

use crate::error::TrackerError;

//
// ─── MODE ──────────────────────────────────────────────────────────────────────
//

/// How the active triple was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerMode {
    /// A hosting page supplied the triple directly.
    External,
    /// The session picked a career out of the roadmap catalog itself.
    SelfSelected,
}

impl TrackerMode {
    /// True when the triple came from an external caller.
    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, TrackerMode::External)
    }
}

//
// ─── ACTIVE TRIPLE ─────────────────────────────────────────────────────────────
//

/// The (career, level, tasks) configuration currently governing the tracker
/// view.
///
/// Either all three are set or the session is unconfigured; partial
/// configuration is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTriple {
    career: String,
    level: Level,
    tasks: Vec<String>,
}

impl ActiveTriple {
    #[must_use]
    pub fn career(&self) -> &str {
        &self.career
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Ordered task descriptions for the active level. May be empty.
    #[must_use]
    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
struct Configuration {
    triple: ActiveTriple,
    mode: TrackerMode,
}

/// Session-scoped tracker configuration.
///
/// Starts unconfigured. A configuration event (external [`configure`] or
/// catalog [`select_from_catalog`]) sets the active triple; later events
/// replace it, but nothing clears it back to unconfigured within a session.
///
/// [`configure`]: TrackerSession::configure
/// [`select_from_catalog`]: TrackerSession::select_from_catalog
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSession {
    configuration: Option<Configuration>,
    started_at: DateTime<Utc>,
    configured_at: Option<DateTime<Utc>>,
}

impl TrackerSession {
    /// Creates an unconfigured session.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            configuration: None,
            started_at,
            configured_at: None,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the current triple was set, if ever.
    #[must_use]
    pub fn configured_at(&self) -> Option<DateTime<Utc>> {
        self.configured_at
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.configuration.is_some()
    }

    /// The active triple, or `None` while unconfigured. Never guesses a
    /// default.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveTriple> {
        self.configuration.as_ref().map(|c| &c.triple)
    }

    /// How the active triple was chosen, or `None` while unconfigured.
    #[must_use]
    pub fn mode(&self) -> Option<TrackerMode> {
        self.configuration.as_ref().map(|c| c.mode)
    }

    /// Sets the active triple from a hosting caller.
    ///
    /// An empty task list is valid: a level with zero tasks is a legitimate,
    /// if degenerate, configuration.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidConfiguration` when `career` is blank;
    /// the previously active triple stays untouched.
    pub fn configure(
        &mut self,
        career: impl Into<String>,
        level: Level,
        tasks: Vec<String>,
        configured_at: DateTime<Utc>,
    ) -> Result<&ActiveTriple, TrackerError> {
        let career = career.into();
        if career.trim().is_empty() {
            return Err(TrackerError::InvalidConfiguration {
                reason: "career name cannot be empty",
            });
        }
        let triple = ActiveTriple {
            career,
            level,
            tasks,
        };
        Ok(self.install(triple, TrackerMode::External, configured_at))
    }

    /// Picks `career_name` out of `catalog` and activates its roadmap for
    /// `level`.
    ///
    /// A career that does not define `level` resolves to an empty task list;
    /// that is not an error.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::CareerNotFound` when no entry matches
    /// `career_name` exactly; the previously active triple stays untouched.
    pub fn select_from_catalog(
        &mut self,
        catalog: &RoadmapCatalog,
        career_name: &str,
        level: Level,
        configured_at: DateTime<Utc>,
    ) -> Result<&ActiveTriple, TrackerError> {
        let entry = catalog
            .find(career_name)
            .ok_or_else(|| TrackerError::CareerNotFound {
                name: career_name.to_string(),
            })?;
        let triple = ActiveTriple {
            career: entry.career.clone(),
            level,
            tasks: entry.tasks_for(level).to_vec(),
        };
        Ok(self.install(triple, TrackerMode::SelfSelected, configured_at))
    }

    fn install(
        &mut self,
        triple: ActiveTriple,
        mode: TrackerMode,
        configured_at: DateTime<Utc>,
    ) -> &ActiveTriple {
        self.configured_at = Some(configured_at);
        &self
            .configuration
            .insert(Configuration { triple, mode })
            .triple
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
