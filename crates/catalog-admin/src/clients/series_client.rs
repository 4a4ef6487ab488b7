//! # Series Client
//!
//! Handed to the recording actor so chapters can check their series.
use crate::model::Series;
use crate::series_actor::SeriesError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};

#[derive(Clone)]
pub struct SeriesClient {
    inner: ResourceClient<Series>,
}

impl SeriesClient {
    pub fn new(inner: ResourceClient<Series>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Series> for SeriesClient {
    type Error = SeriesError;

    fn inner(&self) -> &ResourceClient<Series> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SeriesError::Framework(e)
    }
}
