//! Audiobook administration.
//!
//! Audiobooks are series, chapters are recordings, and both (plus the conferences
//! that group them) are pinned to [`ContentType::Audiobook`]: listings only see
//! audiobook rows, everything created here is stamped with that content type, and
//! rows of other content types are reported as not found.

use crate::model::{
    Conference, ConferenceFields, ConferenceId, ContentType, Recording, RecordingFields,
    RecordingId, Series, SeriesFields, SeriesId,
};
use resource_framework::{
    Labels, ListQuery, Reply, ResourceClient, ResourceController, Scope,
};

pub const AUDIOBOOKS: Labels = Labels::new("Audiobook", "Audiobooks");
pub const CHAPTERS: Labels = Labels::new("Chapter", "Chapters");
pub const CONFERENCES: Labels = Labels::new("Conference", "Conferences");

#[derive(Clone)]
pub struct AudiobookController {
    audiobooks: ResourceController<Series>,
    chapters: ResourceController<Recording>,
    conferences: ResourceController<Conference>,
}

impl AudiobookController {
    pub const CONTENT_TYPE: ContentType = ContentType::Audiobook;

    pub fn new(
        series: ResourceClient<Series>,
        recordings: ResourceClient<Recording>,
        conferences: ResourceClient<Conference>,
        default_lang: impl Into<String>,
    ) -> Self {
        let default_lang = default_lang.into();
        let scope = Scope::of_kind(Self::CONTENT_TYPE.code());
        Self {
            audiobooks: ResourceController::new(series, AUDIOBOOKS, default_lang.clone())
                .scoped(scope),
            chapters: ResourceController::new(recordings, CHAPTERS, default_lang.clone())
                .scoped(scope)
                .naming("Series", AUDIOBOOKS.singular),
            conferences: ResourceController::new(conferences, CONFERENCES, default_lang)
                .scoped(scope),
        }
    }

    pub async fn all_audiobooks(&self, query: &ListQuery) -> Reply<Series> {
        self.audiobooks.list(query).await
    }

    pub async fn create_audiobook(&self, fields: SeriesFields) -> Reply<Series> {
        self.audiobooks.create(fields).await
    }

    pub async fn update_audiobook(&self, id: SeriesId, fields: SeriesFields) -> Reply<Series> {
        self.audiobooks.update(id, fields).await
    }

    pub async fn delete_audiobook(&self, id: SeriesId) -> Reply<Series> {
        self.audiobooks.delete(id).await
    }

    /// Chapters of every audiobook, or of one when `series` is given.
    pub async fn chapters(&self, query: &ListQuery, series: Option<SeriesId>) -> Reply<Recording> {
        let scope = match series {
            Some(series) => self.chapters.scope().with_parent(series.into()),
            None => self.chapters.scope(),
        };
        self.chapters.list_within(query, scope).await
    }

    pub async fn create_chapter(&self, fields: RecordingFields) -> Reply<Recording> {
        self.chapters.create(fields).await
    }

    pub async fn update_chapter(&self, id: RecordingId, fields: RecordingFields) -> Reply<Recording> {
        self.chapters.update(id, fields).await
    }

    /// Removes the chapter and its speaker links; there is no soft delete here.
    pub async fn delete_chapter(&self, id: RecordingId) -> Reply<Recording> {
        self.chapters.delete(id).await
    }

    pub async fn conferences(&self, query: &ListQuery) -> Reply<Conference> {
        self.conferences.list(query).await
    }

    pub async fn create_conference(&self, fields: ConferenceFields) -> Reply<Conference> {
        self.conferences.create(fields).await
    }

    pub async fn update_conference(
        &self,
        id: ConferenceId,
        fields: ConferenceFields,
    ) -> Reply<Conference> {
        self.conferences.update(id, fields).await
    }

    pub async fn delete_conference(&self, id: ConferenceId) -> Reply<Conference> {
        self.conferences.delete(id).await
    }
}
