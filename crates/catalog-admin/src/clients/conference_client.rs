//! # Conference Client
//!
//! Handed to the series actor so a series can only join an active conference.
use crate::conference_actor::ConferenceError;
use crate::model::Conference;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct ConferenceClient {
    inner: ResourceClient<Conference>,
}

impl ConferenceClient {
    pub fn new(inner: ResourceClient<Conference>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Conference> for ConferenceClient {
    type Error = ConferenceError;

    fn inner(&self) -> &ResourceClient<Conference> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ConferenceError::Framework(e)
    }
}
