//! # Recording Actor
//!
//! Recordings (chapters, on the audiobook surface) belong to a series and may be
//! covered by an agreement. Both links are validated on create and update through
//! the clients in [`RecordingContext`]; delete removes the row outright.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{AgreementClient, SeriesClient};
use crate::config::CatalogConfig;
use crate::model::Recording;
use resource_framework::{ResourceActor, ResourceClient};

/// Dependencies injected into the recording actor at `run`.
#[derive(Clone)]
pub struct RecordingContext {
    pub series: SeriesClient,
    pub agreements: AgreementClient,
}

/// Creates a new Recording actor and its client. Run it with a [`RecordingContext`].
pub fn new(config: &CatalogConfig) -> (ResourceActor<Recording>, ResourceClient<Recording>) {
    ResourceActor::new(config.channel_capacity, config.lister())
}
