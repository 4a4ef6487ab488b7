//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the rows of one
//! entity type. It processes requests one at a time, so every
//! lookup → map → write sequence runs without interleaving: a delete can't slip in
//! between an update's "find active" read and its write.

use crate::client::ResourceClient;
use crate::entity::{CatalogEntity, Deletion, DeletionPolicy, Record, Scope};
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::pagination::PaginatedLister;
use crate::store::ResourceStore;
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the rows of one catalog entity type.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies (other clients, guards) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use resource_framework::{CatalogEntity, FieldMapper, FrameworkError, PaginatedLister, Record, ResourceActor, Scope};
///
/// #[derive(Clone, Debug)]
/// struct Tag { record: Record<u32>, label: String }
/// #[derive(Debug)]
/// struct TagFields { label: String, lang: String }
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error")]
/// struct TagError;
/// impl From<TagError> for FrameworkError {
///     fn from(e: TagError) -> Self { FrameworkError::EntityError(Box::new(e)) }
/// }
///
/// impl FieldMapper for Tag {
///     type Payload = TagFields;
///     fn map_fields(&mut self, p: TagFields) { self.label = p.label; self.record.lang = p.lang; }
/// }
///
/// impl CatalogEntity for Tag {
///     type Id = u32;
///     type Context = ();
///     type Error = TagError;
///     const KIND: &'static str = "Tag";
///     fn blank(record: Record<u32>, _: &Scope) -> Self { Self { record, label: String::new() } }
///     fn record(&self) -> &Record<u32> { &self.record }
///     fn record_mut(&mut self) -> &mut Record<u32> { &mut self.record }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10, PaginatedLister::new(25));
///     tokio::spawn(actor.run(()));
///
///     let fields = TagFields { label: "hymns".into(), lang: "en".into() };
///     let id = client.create(fields, Scope::any()).await.unwrap();
///     let tag = client.get(id).await.unwrap();
///     assert!(tag.record.active);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocate the next id, build a blank entity, map the payload, force
///   `active = true`, run `on_create`, insert.
/// * **Get**: active row by id, or `NotFound`.
/// * **List**: delegate to the [`PaginatedLister`].
/// * **Update**: clone the active row, map the payload, run `on_update`, write back.
///   A failing hook leaves the stored row as it was.
/// * **Delete**: `Deactivate` entities consult their [`ReferentialGuard`](crate::ReferentialGuard)
///   first; `Remove` entities are dropped from the store without asking.
pub struct ResourceActor<T: CatalogEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
    lister: PaginatedLister,
    next_id: u32,
}

impl<T: CatalogEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; senders wait when it's full.
    /// * `lister` - pagination settings for `List` requests.
    pub fn new(buffer_size: usize, lister: PaginatedLister) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: ResourceStore::new(),
            lister,
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = T::KIND;
        info!(entity_type, page_size = self.lister.page_size(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create {
                    payload,
                    scope,
                    respond_to,
                } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.create(payload, &scope, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get {
                    id,
                    scope,
                    respond_to,
                } => {
                    let result = self.store.find_active_within(&id, &scope).cloned();
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List {
                    filter,
                    page,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.lister.list(&self.store, &filter, page)));
                }
                ResourceRequest::Update {
                    id,
                    scope,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.update(&id, &scope, payload, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete {
                    id,
                    scope,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &scope, &context).await;
                    match &result {
                        Ok(outcome) => {
                            info!(entity_type, %id, ?outcome, size = self.store.len(), "Deleted")
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Referencing {
                    parent,
                    include_inactive,
                    respond_to,
                } => {
                    let count = self.store.count_referencing(parent, include_inactive);
                    debug!(entity_type, parent, include_inactive, count, "Referencing");
                    let _ = respond_to.send(Ok(count));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        payload: T::Payload,
        scope: &Scope,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::blank(Record::new(id.clone(), Utc::now()), scope);
        item.map_fields(payload);
        // create always activates, whatever the payload carried
        item.record_mut().active = true;
        item.on_create(context)
            .await
            .map_err(Into::<FrameworkError>::into)?;

        self.next_id += 1;
        self.store.insert(item);
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        scope: &Scope,
        payload: T::Payload,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = self.store.find_active_within(id, scope)?.clone();
        item.map_fields(payload);
        item.on_update(context)
            .await
            .map_err(Into::<FrameworkError>::into)?;

        self.store.update(item.clone())?;
        Ok(item)
    }

    async fn delete(
        &mut self,
        id: &T::Id,
        scope: &Scope,
        context: &T::Context,
    ) -> Result<Deletion, FrameworkError> {
        self.store.find_active_within(id, scope)?;

        match T::DELETION {
            DeletionPolicy::Remove => {
                self.store.remove(id)?;
                Ok(Deletion::Removed)
            }
            DeletionPolicy::Deactivate => {
                if let Some(guard) = T::guard(context) {
                    if let Some(relation) = guard.blocking_relation(id).await? {
                        return Err(FrameworkError::Referenced {
                            entity: T::KIND,
                            id: id.to_string(),
                            relation,
                        });
                    }
                }
                self.store.soft_delete(id)?;
                Ok(Deletion::Deactivated)
            }
        }
    }
}
