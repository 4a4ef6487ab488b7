//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! Entity-specific error enums convert into [`FrameworkError`] so the controller layer
//! can translate every failure into a structured reply.

use std::fmt::Display;

/// Errors that can occur within the resource framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The row does not exist or is no longer active.
    #[error("{entity} {id} not found.")]
    NotFound { entity: &'static str, id: String },
    /// Deactivation vetoed by a dependent relation.
    #[error("{entity} {id} is referenced by {relation} and can not be deleted.")]
    Referenced {
        entity: &'static str,
        id: String,
        relation: String,
    },
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True when this is a `NotFound` for exactly `entity` / `id`.
    pub fn is_missing(&self, entity: &str, id: impl Display) -> bool {
        match self {
            Self::NotFound {
                entity: missing_entity,
                id: missing_id,
            } => *missing_entity == entity && *missing_id == id.to_string(),
            _ => false,
        }
    }
}
