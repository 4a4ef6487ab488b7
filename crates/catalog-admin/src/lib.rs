//! # Catalog Admin
//!
//! Administration of a media catalog on top of `resource_framework`: one resource
//! actor per table (owners, agreements, series, recordings, conferences), typed
//! clients for the cross-actor checks, and controllers that turn every outcome into
//! a status-coded reply.
//!
//! Start with [`lifecycle::CatalogSystem`], then use its
//! [`OwnerController`](controllers::OwnerController) and
//! [`AudiobookController`](controllers::AudiobookController).

pub mod agreement_actor;
pub mod clients;
pub mod config;
pub mod conference_actor;
pub mod controllers;
pub mod lifecycle;
pub mod model;
pub mod owner_actor;
pub mod recording_actor;
pub mod relations;
pub mod series_actor;
