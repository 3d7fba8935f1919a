#![forbid(unsafe_code)]

//! Loads career roadmap catalogs from JSON.
//!
//! The on-disk shape is an array of entries:
//!
//! ```json
//! [
//!   {
//!     "career": "Data Scientist",
//!     "roadmap": { "Beginner": ["Learn Python basics"] },
//!     "required_skills": ["Statistics"],
//!     "interest_tags": ["data"],
//!     "resources": ["https://example.com/ds"]
//!   }
//! ]
//! ```
//!
//! Auxiliary fields may be omitted. The tracker core receives the parsed
//! [`RoadmapCatalog`] and never touches the file format itself.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracker_core::model::RoadmapCatalog;

/// Errors emitted while loading a roadmap catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog data is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

/// Loads a catalog from a JSON file on disk.
///
/// # Errors
///
/// Returns `CatalogError::Io` when the file cannot be opened and
/// `CatalogError::Parse` when its contents are not a valid catalog.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RoadmapCatalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(BufReader::new(file))
}

/// Loads a catalog from any reader producing catalog JSON.
///
/// # Errors
///
/// Returns `CatalogError::Parse` when the data is not a valid catalog.
pub fn from_reader(reader: impl Read) -> Result<RoadmapCatalog, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a catalog from a JSON string.
///
/// # Errors
///
/// Returns `CatalogError::Parse` when the string is not a valid catalog.
pub fn from_json_str(data: &str) -> Result<RoadmapCatalog, CatalogError> {
    Ok(serde_json::from_str(data)?)
}
