use crate::model::{ConferenceId, ContentType, SeriesId};
use resource_framework::Record;
use serde::{Deserialize, Serialize};

/// A content container; the audiobook surface calls it an audiobook.
///
/// `content_type` is fixed when the series is created and never comes from a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(flatten)]
    pub record: Record<SeriesId>,
    pub content_type: ContentType,
    pub conference_id: Option<ConferenceId>,
    pub sponsor_id: Option<u32>,
    pub hiragana: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub location: String,
    pub hidden: bool,
    pub notes: String,
}

impl Series {
    pub fn new(record: Record<SeriesId>, content_type: ContentType) -> Self {
        Self {
            record,
            content_type,
            conference_id: None,
            sponsor_id: None,
            hiragana: String::new(),
            title: String::new(),
            summary: String::new(),
            description: String::new(),
            logo: String::new(),
            location: String::new(),
            hidden: false,
            notes: String::new(),
        }
    }

    pub fn id(&self) -> SeriesId {
        self.record.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesFields {
    pub conference_id: Option<ConferenceId>,
    pub sponsor_id: Option<u32>,
    pub hiragana: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub location: String,
    pub hidden: bool,
    pub notes: String,
    pub lang: String,
}

impl SeriesFields {
    pub fn titled(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            ..Default::default()
        }
    }

    pub fn in_conference(mut self, conference_id: ConferenceId) -> Self {
        self.conference_id = Some(conference_id);
        self
    }
}
