//! Owner administration: list, show, add, update and delete copyright owners.

use crate::model::{Owner, OwnerFields, OwnerId};
use resource_framework::{Labels, ListQuery, Reply, ResourceClient, ResourceController};

pub const OWNERS: Labels = Labels::new("Owner", "Owners");

#[derive(Clone)]
pub struct OwnerController {
    owners: ResourceController<Owner>,
}

impl OwnerController {
    pub fn new(owners: ResourceClient<Owner>, default_lang: impl Into<String>) -> Self {
        Self {
            owners: ResourceController::new(owners, OWNERS, default_lang),
        }
    }

    /// Owners in the configured default locale; the listing takes no `lang`.
    pub async fn all(&self, page: u64) -> Reply<Owner> {
        self.owners.list(&ListQuery::default().page(page)).await
    }

    pub async fn one(&self, id: OwnerId) -> Reply<Owner> {
        self.owners.get(id).await
    }

    pub async fn create(&self, fields: OwnerFields) -> Reply<Owner> {
        self.owners.create(fields).await
    }

    pub async fn update(&self, id: OwnerId, fields: OwnerFields) -> Reply<Owner> {
        self.owners.update(id, fields).await
    }

    /// Deactivates the owner; 409 while agreements reference it.
    pub async fn delete(&self, id: OwnerId) -> Reply<Owner> {
        self.owners.delete(id).await
    }
}
