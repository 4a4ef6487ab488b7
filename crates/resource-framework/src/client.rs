//! # Generic Client
//!
//! This module defines the generic client for communicating with resource actors.

use crate::entity::{CatalogEntity, Deletion, Scope};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::pagination::Page;
use crate::store::ListFilter;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap. Every call resolves to
/// `Result<…, FrameworkError>`; a stopped actor shows up as `ActorClosed`.
pub struct ResourceClient<T: CatalogEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: CatalogEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CatalogEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::Payload, scope: Scope) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create {
            payload,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.get_within(id, Scope::any()).await
    }

    /// Like [`get`](Self::get), but a row outside `scope` is `NotFound`.
    pub async fn get_within(&self, id: T::Id, scope: Scope) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get {
            id,
            scope,
            respond_to,
        })
        .await
    }

    pub async fn list(&self, filter: ListFilter, page: u64) -> Result<Page<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter,
            page,
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, payload: T::Payload) -> Result<T, FrameworkError> {
        self.update_within(id, Scope::any(), payload).await
    }

    pub async fn update_within(
        &self,
        id: T::Id,
        scope: Scope,
        payload: T::Payload,
    ) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            scope,
            payload,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Deletion, FrameworkError> {
        self.delete_within(id, Scope::any()).await
    }

    pub async fn delete_within(&self, id: T::Id, scope: Scope) -> Result<Deletion, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete {
            id,
            scope,
            respond_to,
        })
        .await
    }

    /// Count rows whose parent linkage is `parent`.
    pub async fn referencing(&self, parent: u32, include_inactive: bool) -> Result<u64, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Referencing {
            parent,
            include_inactive,
            respond_to,
        })
        .await
    }
}
