//! # Resource Framework
//!
//! Building blocks for catalog administration back ends: every resource type
//! (owners, series, recordings, conferences…) goes through the same lifecycle of
//! filtered listing, lookup-or-fail, field-mapped create/update and soft or hard
//! delete. This crate implements that lifecycle once, on top of the actor model.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`CatalogEntity`], [`FieldMapper`]) - what a row looks like,
//!    which fields a payload may write, how it is deleted and what may veto that.
//! 2. **Runtime Layer** ([`ResourceActor`]) - owns a [`ResourceStore`] and processes
//!    requests sequentially, so every lookup → mutate → persist step is isolated.
//! 3. **Interface Layer** ([`ResourceClient`], [`ResourceController`]) - type-safe
//!    messaging and the translation of outcomes into [`Reply`] values.
//!
//! ## Soft Delete & Visibility
//!
//! Rows carry an `active` flag (see [`Record`]). Inactive rows are invisible to get,
//! list, update and delete. Entities with [`DeletionPolicy::Deactivate`] flip the flag;
//! entities with [`DeletionPolicy::Remove`] are erased.
//!
//! ## Referential Guards via Context Injection
//!
//! Dependencies are injected at **runtime** through `run(context)`. A guarded entity
//! keeps its [`ReferentialGuard`] in that context; the guard's relations ask other
//! actors whether dependent rows still point at the id being deleted.
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_framework::{
//!     CatalogEntity, DependentRelation, FieldMapper, FrameworkError, PaginatedLister, Record,
//!     ReferentialGuard, ResourceActor, ResourceClient, Scope,
//! };
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("library error")]
//! struct LibraryError;
//! impl From<LibraryError> for FrameworkError {
//!     fn from(e: LibraryError) -> Self { FrameworkError::EntityError(Box::new(e)) }
//! }
//!
//! // Books point at their shelf through `Scope::parent`.
//! #[derive(Clone, Debug)]
//! struct Book { record: Record<u32>, shelf: Option<u32> }
//! #[derive(Debug)]
//! struct BookFields;
//! impl FieldMapper for Book {
//!     type Payload = BookFields;
//!     fn map_fields(&mut self, _: BookFields) {}
//! }
//! impl CatalogEntity for Book {
//!     type Id = u32;
//!     type Context = ();
//!     type Error = LibraryError;
//!     const KIND: &'static str = "Book";
//!     fn blank(record: Record<u32>, scope: &Scope) -> Self { Self { record, shelf: scope.parent } }
//!     fn record(&self) -> &Record<u32> { &self.record }
//!     fn record_mut(&mut self) -> &mut Record<u32> { &mut self.record }
//!     fn scope(&self) -> Scope { Scope { kind: None, parent: self.shelf } }
//! }
//!
//! struct BooksOnShelf(ResourceClient<Book>);
//!
//! #[async_trait]
//! impl DependentRelation<u32> for BooksOnShelf {
//!     fn name(&self) -> &str { "books" }
//!     async fn is_referenced(&self, id: &u32) -> Result<bool, FrameworkError> {
//!         Ok(self.0.referencing(*id, false).await? > 0)
//!     }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { record: Record<u32> }
//! #[derive(Debug)]
//! struct ShelfFields;
//! impl FieldMapper for Shelf {
//!     type Payload = ShelfFields;
//!     fn map_fields(&mut self, _: ShelfFields) {}
//! }
//! impl CatalogEntity for Shelf {
//!     type Id = u32;
//!     type Context = ReferentialGuard<u32>;
//!     type Error = LibraryError;
//!     const KIND: &'static str = "Shelf";
//!     fn blank(record: Record<u32>, _: &Scope) -> Self { Self { record } }
//!     fn record(&self) -> &Record<u32> { &self.record }
//!     fn record_mut(&mut self) -> &mut Record<u32> { &mut self.record }
//!     fn guard(ctx: &ReferentialGuard<u32>) -> Option<&ReferentialGuard<u32>> { Some(ctx) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (book_actor, books) = ResourceActor::<Book>::new(10, PaginatedLister::new(25));
//!     let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(10, PaginatedLister::new(25));
//!     tokio::spawn(book_actor.run(()));
//!     let guard = ReferentialGuard::new().with_relation(BooksOnShelf(books.clone()));
//!     tokio::spawn(shelf_actor.run(guard));
//!
//!     let shelf = shelves.create(ShelfFields, Scope::any()).await.unwrap();
//!     books.create(BookFields, Scope::any().with_parent(shelf)).await.unwrap();
//!
//!     let err = shelves.delete(shelf).await.unwrap_err();
//!     assert_eq!(err.to_string(), "Shelf 1 is referenced by books and can not be deleted.");
//! }
//! ```
//!
//! The dependency graph between actors must stay acyclic: an actor waiting on a
//! relation that in turn waits on it would never answer, and shutdown by channel
//! closure relies on the same property.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Different entity types are served in parallel
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts replies for a `ResourceClient<T>` without spawning an
//! actor; see the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod controller;
pub mod entity;
pub mod error;
pub mod guard;
pub mod mapper;
pub mod message;
pub mod mock;
pub mod pagination;
pub mod reply;
pub mod store;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use controller::{Labels, ListQuery, ResourceController};
pub use entity::{CatalogEntity, Deletion, DeletionPolicy, Record, Scope};
pub use error::FrameworkError;
pub use guard::{DependentRelation, ReferentialGuard};
pub use mapper::FieldMapper;
pub use message::{ResourceRequest, Response};
pub use pagination::{Page, PaginatedLister};
pub use reply::{Body, Reply, Status};
pub use store::{ListFilter, ResourceStore};
