//! # Referential Guard
//!
//! Before an entity is deactivated, every configured [`DependentRelation`] is asked
//! whether a dependent row still points at it. The first relation that answers yes
//! vetoes the delete and its name ends up in the conflict message.
//!
//! Relations usually query another actor (an owner asks the agreement actor), so
//! they are async and wired in through the entity's `Context`.

use crate::error::FrameworkError;
use async_trait::async_trait;
use std::sync::Arc;

/// A table whose rows can reference an entity of type `Id`.
#[async_trait]
pub trait DependentRelation<Id>: Send + Sync {
    /// Short name used in conflict messages, e.g. `"agreements"`.
    fn name(&self) -> &str;

    async fn is_referenced(&self, id: &Id) -> Result<bool, FrameworkError>;
}

pub struct ReferentialGuard<Id> {
    relations: Vec<Arc<dyn DependentRelation<Id>>>,
}

impl<Id> Clone for ReferentialGuard<Id> {
    fn clone(&self) -> Self {
        Self {
            relations: self.relations.clone(),
        }
    }
}

impl<Id: Send + Sync> Default for ReferentialGuard<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Send + Sync> ReferentialGuard<Id> {
    pub fn new() -> Self {
        Self {
            relations: Vec::new(),
        }
    }

    pub fn with_relation(mut self, relation: impl DependentRelation<Id> + 'static) -> Self {
        self.relations.push(Arc::new(relation));
        self
    }

    pub fn relation_names(&self) -> Vec<&str> {
        self.relations.iter().map(|r| r.name()).collect()
    }

    /// Name of the first relation still referencing `id`, if any.
    pub async fn blocking_relation(&self, id: &Id) -> Result<Option<String>, FrameworkError> {
        for relation in &self.relations {
            if relation.is_referenced(id).await? {
                return Ok(Some(relation.name().to_string()));
            }
        }
        Ok(None)
    }

    pub async fn can_deactivate(&self, id: &Id) -> Result<bool, FrameworkError> {
        Ok(self.blocking_relation(id).await?.is_none())
    }
}
