//! [`CatalogEntity`] implementation for [`Recording`].
//!
//! Recordings are the one entity that is hard-deleted: the row goes away together
//! with its speaker links, and no guard is consulted.

use super::{RecordingContext, RecordingError};
use crate::model::{ContentType, Recording, RecordingFields, RecordingId, SeriesId};
use async_trait::async_trait;
use resource_framework::{
    ActorClient, CatalogEntity, DeletionPolicy, FieldMapper, FrameworkError, Record, Scope,
};

impl FieldMapper for Recording {
    type Payload = RecordingFields;

    fn map_fields(&mut self, payload: RecordingFields) {
        self.series_id = payload.series_id;
        self.sponsor_id = payload.sponsor_id;
        self.agreement_id = payload.agreement_id;
        self.title = payload.title;
        self.publish_date = payload.publish_date;
        self.copyright_year = payload.copyright_year;
        self.is_complete = payload.is_complete;
        self.hidden = payload.hidden;
        self.download_disabled = payload.download_disabled;
        self.speaker_ids = payload.speaker_ids;
        self.record.lang = payload.lang;
    }
}

#[async_trait]
impl CatalogEntity for Recording {
    type Id = RecordingId;
    type Context = RecordingContext;
    type Error = RecordingError;

    const KIND: &'static str = "Recording";
    const DELETION: DeletionPolicy = DeletionPolicy::Remove;

    fn blank(record: Record<RecordingId>, scope: &Scope) -> Self {
        let content_type = scope
            .kind
            .and_then(ContentType::from_code)
            .unwrap_or_default();
        Recording::new(record, content_type, SeriesId(scope.parent.unwrap_or_default()))
    }

    fn record(&self) -> &Record<RecordingId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<RecordingId> {
        &mut self.record
    }

    fn scope(&self) -> Scope {
        Scope::of_kind(self.content_type.code()).with_parent(self.series_id.into())
    }

    async fn on_create(&mut self, ctx: &RecordingContext) -> Result<(), RecordingError> {
        self.check_links(ctx).await
    }

    async fn on_update(&mut self, ctx: &RecordingContext) -> Result<(), RecordingError> {
        self.check_links(ctx).await
    }
}

impl Recording {
    /// The series must be active and of the recording's content type; the agreement,
    /// when one is named, must be active.
    async fn check_links(&self, ctx: &RecordingContext) -> Result<(), RecordingError> {
        if !ctx
            .series
            .exists_within(self.series_id, Scope::of_kind(self.content_type.code()))
            .await
            .map_err(FrameworkError::from)?
        {
            return Err(RecordingError::SeriesNotFound(self.series_id));
        }

        if let Some(agreement_id) = self.agreement_id {
            if !ctx
                .agreements
                .exists(agreement_id)
                .await
                .map_err(FrameworkError::from)?
            {
                return Err(RecordingError::AgreementNotFound(agreement_id));
            }
        }
        Ok(())
    }
}
