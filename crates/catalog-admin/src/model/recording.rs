use crate::model::{AgreementId, ContentType, RecordingId, SeriesId, SpeakerId};
use chrono::NaiveDate;
use resource_framework::Record;
use serde::{Deserialize, Serialize};

/// A single recording inside a series; a chapter, for audiobooks.
///
/// Speakers are linked through `speaker_ids`, so removing the recording removes its
/// speaker associations with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    #[serde(flatten)]
    pub record: Record<RecordingId>,
    pub content_type: ContentType,
    pub series_id: SeriesId,
    pub sponsor_id: Option<u32>,
    pub agreement_id: Option<AgreementId>,
    pub title: String,
    pub publish_date: Option<NaiveDate>,
    pub copyright_year: String,
    pub is_complete: bool,
    pub hidden: bool,
    pub download_disabled: bool,
    pub speaker_ids: Vec<SpeakerId>,
}

impl Recording {
    pub fn new(record: Record<RecordingId>, content_type: ContentType, series_id: SeriesId) -> Self {
        Self {
            record,
            content_type,
            series_id,
            sponsor_id: None,
            agreement_id: None,
            title: String::new(),
            publish_date: None,
            copyright_year: String::new(),
            is_complete: false,
            hidden: false,
            download_disabled: false,
            speaker_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> RecordingId {
        self.record.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingFields {
    pub series_id: SeriesId,
    #[serde(default)]
    pub sponsor_id: Option<u32>,
    #[serde(default)]
    pub agreement_id: Option<AgreementId>,
    pub title: String,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub copyright_year: String,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub download_disabled: bool,
    #[serde(default)]
    pub speaker_ids: Vec<SpeakerId>,
    pub lang: String,
}

impl RecordingFields {
    pub fn new(series_id: SeriesId, title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            series_id,
            sponsor_id: None,
            agreement_id: None,
            title: title.into(),
            publish_date: None,
            copyright_year: String::new(),
            is_complete: false,
            hidden: false,
            download_disabled: false,
            speaker_ids: Vec::new(),
            lang: lang.into(),
        }
    }

    pub fn under_agreement(mut self, agreement_id: AgreementId) -> Self {
        self.agreement_id = Some(agreement_id);
        self
    }

    pub fn with_speakers(mut self, speaker_ids: impl IntoIterator<Item = SpeakerId>) -> Self {
        self.speaker_ids = speaker_ids.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_reads_camel_case_with_defaults() {
        let fields: RecordingFields = serde_json::from_str(
            r#"{
                "seriesId": 4,
                "agreementId": 1,
                "title": "Hello World",
                "publishDate": "2019-01-01",
                "copyrightYear": "2019",
                "downloadDisabled": true,
                "speakerIds": [333, 2],
                "lang": "en"
            }"#,
        )
        .unwrap();

        assert_eq!(fields.series_id, SeriesId(4));
        assert_eq!(fields.agreement_id, Some(AgreementId(1)));
        assert_eq!(fields.publish_date, NaiveDate::from_ymd_opt(2019, 1, 1));
        assert!(fields.download_disabled);
        assert!(!fields.is_complete);
        assert_eq!(fields.speaker_ids, vec![SpeakerId(333), SpeakerId(2)]);
    }
}
