use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Level;

/// One career's entry in the roadmap catalog.
///
/// `required_skills`, `interest_tags`, and `resources` ride along for the
/// presentation layer; the tracker core never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRoadmapEntry {
    pub career: String,
    #[serde(default)]
    pub roadmap: BTreeMap<Level, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interest_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl CareerRoadmapEntry {
    /// Ordered tasks for `level`, or an empty slice when the entry does not
    /// define that level. Not every career defines every level.
    #[must_use]
    pub fn tasks_for(&self, level: Level) -> &[String] {
        self.roadmap.get(&level).map_or(&[], Vec::as_slice)
    }
}

/// The collection of career roadmap entries available for selection.
///
/// An empty catalog is valid, if unproductive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadmapCatalog {
    entries: Vec<CareerRoadmapEntry>,
}

impl RoadmapCatalog {
    #[must_use]
    pub fn new(entries: Vec<CareerRoadmapEntry>) -> Self {
        Self { entries }
    }

    /// Looks up an entry by exact career name.
    #[must_use]
    pub fn find(&self, career: &str) -> Option<&CareerRoadmapEntry> {
        self.entries.iter().find(|entry| entry.career == career)
    }

    /// Career names, in catalog order.
    pub fn careers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.career.as_str())
    }

    #[must_use]
    pub fn entries(&self) -> &[CareerRoadmapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
