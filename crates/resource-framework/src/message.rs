//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::{CatalogEntity, Deletion, Scope};
use crate::error::FrameworkError;
use crate::pagination::Page;
use crate::store::ListFilter;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to a `ResourceActor`.
///
/// The variants follow the resource lifecycle every catalog controller repeats:
///
/// - **Create**: map the payload onto a fresh row, force it active, insert.
/// - **Get**: find an active row by id, or `NotFound`.
/// - **List**: filtered, ordered, paginated listing of active rows.
/// - **Update**: find active row, map payload, write the full state back.
/// - **Delete**: deactivate (guarded) or remove, per [`CatalogEntity::DELETION`].
/// - **Referencing**: count rows whose parent is a given id; backs the dependent
///   relations other entities' guards consult.
///
/// Get, Update and Delete carry a [`Scope`]: a row outside it is `NotFound`, so a
/// surface pinned to one content type never touches another type's rows.
///
/// Everything is typed through the [`CatalogEntity`] associated types, so an owner
/// payload can't be sent to the recording actor.
#[derive(Debug)]
pub enum ResourceRequest<T: CatalogEntity> {
    Create {
        payload: T::Payload,
        scope: Scope,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        scope: Scope,
        respond_to: Response<T>,
    },
    List {
        filter: ListFilter,
        page: u64,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        scope: Scope,
        payload: T::Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        scope: Scope,
        respond_to: Response<Deletion>,
    },
    Referencing {
        parent: u32,
        include_inactive: bool,
        respond_to: Response<u64>,
    },
}
