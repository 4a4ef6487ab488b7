//! # ActorClient Trait
//!
//! Common surface for resource-specific client wrappers: default `get` and `exists`
//! built on top of a generic `ResourceClient`.
use crate::{CatalogEntity, FrameworkError, ResourceClient, Scope};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard lookups.
///
/// Wrappers are what one actor hands to another as a dependency (the recording
/// actor holds a series client to validate `series_id`), so they speak the caller's
/// error type through [`ActorClient::map_error`].
///
/// # Example
///
/// ```rust
/// use resource_framework::{ActorClient, CatalogEntity, FieldMapper, FrameworkError, Record, ResourceClient, Scope};
///
/// #[derive(Clone, Debug)]
/// struct Album { record: Record<u32> }
/// #[derive(Debug)]
/// struct AlbumFields;
/// #[derive(Debug, thiserror::Error)]
/// #[error("album error: {0}")]
/// struct AlbumError(String);
/// impl From<AlbumError> for FrameworkError {
///     fn from(e: AlbumError) -> Self { FrameworkError::EntityError(Box::new(e)) }
/// }
/// impl FieldMapper for Album {
///     type Payload = AlbumFields;
///     fn map_fields(&mut self, _: AlbumFields) {}
/// }
/// impl CatalogEntity for Album {
///     type Id = u32;
///     type Context = ();
///     type Error = AlbumError;
///     const KIND: &'static str = "Album";
///     fn blank(record: Record<u32>, _: &Scope) -> Self { Self { record } }
///     fn record(&self) -> &Record<u32> { &self.record }
///     fn record_mut(&mut self) -> &mut Record<u32> { &mut self.record }
/// }
///
/// struct AlbumClient {
///     inner: ResourceClient<Album>,
/// }
///
/// impl ActorClient<Album> for AlbumClient {
///     type Error = AlbumError;
///
///     fn inner(&self) -> &ResourceClient<Album> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         AlbumError(e.to_string())
///     }
/// }
///
/// async fn usage(client: AlbumClient) {
///     // get() and exists() are provided
///     let _ = client.get(1).await;
///     let _ = client.exists(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: CatalogEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an active entity by ID.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Whether an active entity with this ID exists. Only transport failures are
    /// errors; a missing or inactive row is `Ok(false)`.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn exists(&self, id: T::Id) -> Result<bool, Self::Error> {
        self.exists_within(id, Scope::any()).await
    }

    /// Like [`exists`](Self::exists), but a row outside `scope` counts as missing.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn exists_within(&self, id: T::Id, scope: Scope) -> Result<bool, Self::Error> {
        match self.inner().get_within(id, scope).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::NotFound { .. }) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
