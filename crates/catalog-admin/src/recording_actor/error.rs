//! Error types for the Recording actor.

use crate::model::{AgreementId, SeriesId};
use resource_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("Series {0} not found.")]
    SeriesNotFound(SeriesId),

    #[error("Agreement {0} not found.")]
    AgreementNotFound(AgreementId),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl From<RecordingError> for FrameworkError {
    fn from(e: RecordingError) -> Self {
        match e {
            RecordingError::SeriesNotFound(id) => FrameworkError::not_found("Series", id),
            RecordingError::AgreementNotFound(id) => FrameworkError::not_found("Agreement", id),
            RecordingError::Framework(e) => e,
        }
    }
}
