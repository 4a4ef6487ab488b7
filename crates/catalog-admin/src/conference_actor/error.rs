//! Error types for the Conference actor.

use resource_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConferenceError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl From<ConferenceError> for FrameworkError {
    fn from(e: ConferenceError) -> Self {
        match e {
            ConferenceError::Framework(e) => e,
        }
    }
}
