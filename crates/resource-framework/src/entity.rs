//! # CatalogEntity Trait
//!
//! The `CatalogEntity` trait is the capability descriptor every catalog resource
//! (Owner, Series, Recording, Conference, …) implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the id type, the writable field
//! set (through [`FieldMapper`]), the deletion policy, the scoping columns and the
//! dependent relations that may veto a deactivation.
//!
//! Every row shares the same bookkeeping columns, grouped in [`Record`]:
//! `id`, `lang`, `active` and `created`. A row with `active == false` is invisible to
//! reads, listings, updates and deletes.

use crate::error::FrameworkError;
use crate::guard::ReferentialGuard;
use crate::mapper::FieldMapper;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Columns carried by every catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<Id> {
    pub id: Id,
    pub lang: String,
    pub active: bool,
    pub created: DateTime<Utc>,
}

impl<Id> Record<Id> {
    /// A fresh, not yet activated record. The field mapper fills `lang`.
    pub fn new(id: Id, created: DateTime<Utc>) -> Self {
        Self {
            id,
            lang: String::new(),
            active: false,
            created,
        }
    }
}

/// What "delete" means for an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// Flip `active` to false, after the referential guard agrees.
    Deactivate,
    /// Remove the row outright. The guard is not consulted.
    Remove,
}

/// Result of a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deactivated,
    Removed,
}

/// Entity-specific scoping columns.
///
/// `kind` is a discriminator such as a content type code; `parent` is the id of the
/// owning row (the series of a chapter, the owner of an agreement). When used as a
/// filter, `None` means "don't care".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scope {
    pub kind: Option<u32>,
    pub parent: Option<u32>,
}

impl Scope {
    pub const fn any() -> Self {
        Self {
            kind: None,
            parent: None,
        }
    }

    pub const fn of_kind(kind: u32) -> Self {
        Self {
            kind: Some(kind),
            parent: None,
        }
    }

    pub const fn with_parent(mut self, parent: u32) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Whether a row with scope `row` passes this scope used as a filter.
    pub fn admits(&self, row: &Scope) -> bool {
        self.kind.map_or(true, |kind| row.kind == Some(kind))
            && self.parent.map_or(true, |parent| row.parent == Some(parent))
    }
}

/// Trait that any catalog resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can consult other actors (a chapter checks
/// that its series exists). The `Context` type is injected into every hook when the
/// actor starts running, which lets dependencies be wired after all actors exist.
///
/// # Provided Methods
/// - [`CatalogEntity::scope`] defaults to [`Scope::any`]
/// - [`CatalogEntity::on_create`] / [`CatalogEntity::on_update`] default to `Ok(())`
/// - [`CatalogEntity::guard`] defaults to no dependent relations
#[async_trait]
pub trait CatalogEntity: FieldMapper + Clone + Send + Sync + 'static {
    /// Integer-backed identifier, allocated by the actor.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// Entity-specific failure, convertible for the controller boundary.
    type Error: std::error::Error + Send + Sync + Into<FrameworkError> + 'static;

    /// Name used in logs and error messages, e.g. `"Owner"`.
    const KIND: &'static str;

    const DELETION: DeletionPolicy = DeletionPolicy::Deactivate;

    /// Build an empty entity around `record`. Scoping columns that are fixed by the
    /// caller (content type, for instance) come from `scope`, never from the payload.
    fn blank(record: Record<Self::Id>, scope: &Scope) -> Self;

    fn record(&self) -> &Record<Self::Id>;

    fn record_mut(&mut self) -> &mut Record<Self::Id>;

    fn scope(&self) -> Scope {
        Scope::any()
    }

    /// Called after the payload has been mapped onto a new entity, before insert.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the payload has been mapped onto an existing entity, before the
    /// write. Failing here leaves the stored row untouched.
    async fn on_update(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Dependent relations consulted before a [`DeletionPolicy::Deactivate`] delete.
    fn guard(_ctx: &Self::Context) -> Option<&ReferentialGuard<Self::Id>> {
        None
    }
}
