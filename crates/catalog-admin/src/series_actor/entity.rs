//! [`CatalogEntity`] implementation for [`Series`].
//!
//! A series may join a conference; the conference must be active and of the series'
//! content type when the series is created or updated. The check runs inside the series actor, so the series row is
//! never written with a dangling `conference_id`.

use super::SeriesError;
use crate::clients::ConferenceClient;
use crate::model::{ContentType, Series, SeriesFields, SeriesId};
use async_trait::async_trait;
use resource_framework::{ActorClient, CatalogEntity, FieldMapper, FrameworkError, Record, Scope};

impl FieldMapper for Series {
    type Payload = SeriesFields;

    fn map_fields(&mut self, payload: SeriesFields) {
        self.conference_id = payload.conference_id;
        self.sponsor_id = payload.sponsor_id;
        self.hiragana = payload.hiragana;
        self.title = payload.title;
        self.summary = payload.summary;
        self.description = payload.description;
        self.logo = payload.logo;
        self.location = payload.location;
        self.hidden = payload.hidden;
        self.notes = payload.notes;
        self.record.lang = payload.lang;
    }
}

#[async_trait]
impl CatalogEntity for Series {
    type Id = SeriesId;
    type Context = ConferenceClient;
    type Error = SeriesError;

    const KIND: &'static str = "Series";

    fn blank(record: Record<SeriesId>, scope: &Scope) -> Self {
        let content_type = scope
            .kind
            .and_then(ContentType::from_code)
            .unwrap_or_default();
        Series::new(record, content_type)
    }

    fn record(&self) -> &Record<SeriesId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<SeriesId> {
        &mut self.record
    }

    fn scope(&self) -> Scope {
        Scope {
            kind: Some(self.content_type.code()),
            parent: self.conference_id.map(u32::from),
        }
    }

    async fn on_create(&mut self, conferences: &ConferenceClient) -> Result<(), SeriesError> {
        self.check_conference(conferences).await
    }

    async fn on_update(&mut self, conferences: &ConferenceClient) -> Result<(), SeriesError> {
        self.check_conference(conferences).await
    }
}

impl Series {
    async fn check_conference(&self, conferences: &ConferenceClient) -> Result<(), SeriesError> {
        let Some(conference_id) = self.conference_id else {
            return Ok(());
        };
        if !conferences
            .exists_within(conference_id, Scope::of_kind(self.content_type.code()))
            .await
            .map_err(FrameworkError::from)?
        {
            return Err(SeriesError::ConferenceNotFound(conference_id));
        }
        Ok(())
    }
}
