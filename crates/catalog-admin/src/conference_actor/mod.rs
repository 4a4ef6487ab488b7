//! # Conference Actor
//!
//! Conferences group series. They are soft-deleted without a guard: series check
//! their conference through this actor, so a conference-side guard asking the series
//! actor back would close a dependency cycle.

pub mod entity;
pub mod error;

pub use error::*;

use crate::config::CatalogConfig;
use crate::model::Conference;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a new Conference actor and its client.
pub fn new(config: &CatalogConfig) -> (ResourceActor<Conference>, ResourceClient<Conference>) {
    ResourceActor::new(config.channel_capacity, config.lister())
}
