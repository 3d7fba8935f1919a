use thiserror::Error;

use crate::model::{ParseLevelError, StatusError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Status(#[from] StatusError),
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}
