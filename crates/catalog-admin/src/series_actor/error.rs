//! Error types for the Series actor.

use crate::model::ConferenceId;
use resource_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    /// `conferenceId` names a conference that doesn't exist or is inactive.
    #[error("Conference {0} not found.")]
    ConferenceNotFound(ConferenceId),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl From<SeriesError> for FrameworkError {
    fn from(e: SeriesError) -> Self {
        match e {
            SeriesError::ConferenceNotFound(id) => FrameworkError::not_found("Conference", id),
            SeriesError::Framework(e) => e,
        }
    }
}
