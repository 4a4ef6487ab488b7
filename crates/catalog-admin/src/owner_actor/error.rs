//! Error types for the Owner actor.

use resource_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwnerError {
    /// The engine or a dependency failed.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl From<OwnerError> for FrameworkError {
    fn from(e: OwnerError) -> Self {
        match e {
            OwnerError::Framework(e) => e,
        }
    }
}
