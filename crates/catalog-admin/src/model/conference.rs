use crate::model::{ConferenceId, ContentType};
use resource_framework::Record;
use serde::{Deserialize, Serialize};

/// Groups series under one event or collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    #[serde(flatten)]
    pub record: Record<ConferenceId>,
    pub content_type: ContentType,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub hidden: bool,
    pub notes: String,
}

impl Conference {
    pub fn new(record: Record<ConferenceId>, content_type: ContentType) -> Self {
        Self {
            record,
            content_type,
            title: String::new(),
            summary: String::new(),
            description: String::new(),
            logo: String::new(),
            hidden: false,
            notes: String::new(),
        }
    }

    pub fn id(&self) -> ConferenceId {
        self.record.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConferenceFields {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub hidden: bool,
    pub notes: String,
    pub lang: String,
}

impl ConferenceFields {
    pub fn titled(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            ..Default::default()
        }
    }
}
