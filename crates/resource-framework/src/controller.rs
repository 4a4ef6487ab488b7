//! # Resource Controller
//!
//! One generic controller drives list/get/create/update/delete for any
//! [`CatalogEntity`] and turns every outcome, failures included, into a [`Reply`].
//! Domain controllers are thin compositions of these, configured with labels, a
//! fixed scope and the default locale.

use crate::client::ResourceClient;
use crate::entity::{CatalogEntity, Scope};
use crate::error::FrameworkError;
use crate::reply::{Reply, Status};
use crate::store::ListFilter;
use serde::Deserialize;
use tracing::{debug, error};

/// Names used in reply messages, e.g. `Labels::new("Chapter", "Chapters")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl Labels {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }
}

/// Listing parameters as they arrive from a request's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub lang: Option<String>,
    pub page: Option<u64>,
}

impl ListQuery {
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }
}

pub struct ResourceController<T: CatalogEntity> {
    client: ResourceClient<T>,
    labels: Labels,
    scope: Scope,
    default_lang: String,
    // (dependent KIND, label used for it on this surface)
    dependent_labels: Vec<(&'static str, &'static str)>,
}

impl<T: CatalogEntity> Clone for ResourceController<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            labels: self.labels,
            scope: self.scope,
            default_lang: self.default_lang.clone(),
            dependent_labels: self.dependent_labels.clone(),
        }
    }
}

impl<T: CatalogEntity> ResourceController<T> {
    pub fn new(client: ResourceClient<T>, labels: Labels, default_lang: impl Into<String>) -> Self {
        Self {
            client,
            labels,
            scope: Scope::any(),
            default_lang: default_lang.into(),
            dependent_labels: Vec::new(),
        }
    }

    /// Fix the scope used for listings and stamped on created rows.
    pub fn scoped(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Name a missing dependent of kind `kind` as `label` in replies, e.g. a chapter's
    /// missing `Series` as "Audiobook 9 not found.".
    pub fn naming(mut self, kind: &'static str, label: &'static str) -> Self {
        self.dependent_labels.push((kind, label));
        self
    }

    pub fn labels(&self) -> Labels {
        self.labels
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub async fn list(&self, query: &ListQuery) -> Reply<T> {
        self.list_within(query, self.scope).await
    }

    /// List with an explicit scope, e.g. the chapters of one series.
    /// An empty page is reported as 404, never as an empty success.
    pub async fn list_within(&self, query: &ListQuery, scope: Scope) -> Reply<T> {
        let lang = query
            .lang
            .clone()
            .unwrap_or_else(|| self.default_lang.clone());
        let filter = ListFilter::new(lang).within(scope);

        match self.client.list(filter, query.page.unwrap_or(1)).await {
            Ok(page) if page.is_empty() => Reply::message(
                Status::NotFound,
                format!("{} not found.", self.labels.plural),
            ),
            Ok(page) => Reply::page(page),
            Err(e) => self.failure(e, None),
        }
    }

    pub async fn get(&self, id: T::Id) -> Reply<T> {
        match self.client.get_within(id.clone(), self.scope).await {
            Ok(item) => Reply::item(item),
            Err(e) => self.failure(e, Some(&id)),
        }
    }

    pub async fn create(&self, payload: T::Payload) -> Reply<T> {
        match self.client.create(payload, self.scope).await {
            Ok(id) => {
                debug!(entity_type = T::KIND, %id, "Controller create");
                Reply::message(Status::Created, format!("{} added.", self.labels.singular))
            }
            Err(e) => self.failure(e, None),
        }
    }

    pub async fn update(&self, id: T::Id, payload: T::Payload) -> Reply<T> {
        match self.client.update_within(id.clone(), self.scope, payload).await {
            Ok(_) => Reply::message(
                Status::Created,
                format!("{} {id} updated.", self.labels.singular),
            ),
            Err(e) => self.failure(e, Some(&id)),
        }
    }

    pub async fn delete(&self, id: T::Id) -> Reply<T> {
        match self.client.delete_within(id.clone(), self.scope).await {
            Ok(_) => Reply::message(
                Status::Created,
                format!("{} {id} deleted.", self.labels.singular),
            ),
            Err(e) => self.failure(e, Some(&id)),
        }
    }

    fn failure(&self, err: FrameworkError, id: Option<&T::Id>) -> Reply<T> {
        let label = self.labels.singular;
        match (err, id) {
            (err @ FrameworkError::NotFound { .. }, Some(id)) if err.is_missing(T::KIND, id) => {
                Reply::message(Status::NotFound, format!("{label} {id} not found."))
            }
            // a dependent row (series, conference) is missing
            (FrameworkError::NotFound { entity, id }, _) => {
                let label = self
                    .dependent_labels
                    .iter()
                    .find(|(kind, _)| *kind == entity)
                    .map_or(entity, |(_, label)| *label);
                Reply::message(Status::NotFound, format!("{label} {id} not found."))
            }
            (FrameworkError::Referenced { id, relation, .. }, _) => Reply::message(
                Status::Conflict,
                format!("{label} {id} is referenced by {relation} and can not be deleted."),
            ),
            (FrameworkError::EntityError(e), _) => {
                Reply::message(Status::Unprocessable, e.to_string())
            }
            (err @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped), _) => {
                error!(entity_type = T::KIND, error = %err, "Resource actor unavailable");
                Reply::message(
                    Status::Unavailable,
                    format!("{} are unavailable.", self.labels.plural),
                )
            }
        }
    }
}
