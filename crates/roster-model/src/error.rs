use thiserror::Error;

use crate::RecordId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("no record with id {0}")]
    UnknownRecord(RecordId),
    #[error("no row is currently being edited")]
    EditTargetMissing,
    #[error("unknown website filter: {0}")]
    UnknownFilter(String),
    #[error("unknown sort order: {0}")]
    UnknownSort(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
