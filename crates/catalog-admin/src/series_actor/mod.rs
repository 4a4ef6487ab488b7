//! # Series Actor
//!
//! Series (audiobooks, on the audiobook surface) are scoped by content type and
//! soft-deleted. Context: a [`ConferenceClient`](crate::clients::ConferenceClient)
//! used to validate `conference_id`.
//!
//! ```rust
//! use catalog_admin::clients::ConferenceClient;
//! use catalog_admin::config::CatalogConfig;
//! use catalog_admin::model::{ConferenceId, ContentType, SeriesFields};
//! use catalog_admin::{conference_actor, series_actor};
//! use resource_framework::Scope;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CatalogConfig::default();
//!     let (conference_actor, conferences) = conference_actor::new(&config);
//!     let (series_actor, series) = series_actor::new(&config);
//!     tokio::spawn(conference_actor.run(()));
//!     tokio::spawn(series_actor.run(ConferenceClient::new(conferences)));
//!
//!     let scope = Scope::of_kind(ContentType::Audiobook.code());
//!     let fields = SeriesFields::titled("Pilgrim's Progress", "en").in_conference(ConferenceId(9));
//!     let err = series.create(fields, scope).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Conference 9 not found.");
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::config::CatalogConfig;
use crate::model::Series;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a new Series actor and its client.
/// Run it with a [`ConferenceClient`](crate::clients::ConferenceClient).
pub fn new(config: &CatalogConfig) -> (ResourceActor<Series>, ResourceClient<Series>) {
    ResourceActor::new(config.channel_capacity, config.lister())
}
