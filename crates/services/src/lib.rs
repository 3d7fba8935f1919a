#![forbid(unsafe_code)]

pub mod error;
pub mod progress_store;
pub mod registry;
pub mod tracker;

pub use tracker_core::Clock;

pub use error::TrackerError;
pub use progress_store::ProgressStore;
pub use registry::SessionRegistry;
pub use tracker::{ActiveTriple, TrackerContext, TrackerMode, TrackerSession, compute_progress};
