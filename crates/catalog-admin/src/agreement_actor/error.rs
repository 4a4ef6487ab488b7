//! Error types for the Agreement actor.

use resource_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgreementError {
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl From<AgreementError> for FrameworkError {
    fn from(e: AgreementError) -> Self {
        match e {
            AgreementError::Framework(e) => e,
        }
    }
}
