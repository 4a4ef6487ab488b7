//! # Agreement Actor
//!
//! Agreements are owned by another part of the system; this actor keeps just enough
//! of them (create, lookup, count per owner, remove) for the owner guard to have a
//! real dependent table to consult. It depends on no other actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::config::CatalogConfig;
use crate::model::Agreement;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a new Agreement actor and its client.
pub fn new(config: &CatalogConfig) -> (ResourceActor<Agreement>, ResourceClient<Agreement>) {
    ResourceActor::new(config.channel_capacity, config.lister())
}
