use super::ConferenceError;
use crate::model::{Conference, ConferenceFields, ConferenceId, ContentType};
use resource_framework::{CatalogEntity, FieldMapper, Record, Scope};

impl FieldMapper for Conference {
    type Payload = ConferenceFields;

    fn map_fields(&mut self, payload: ConferenceFields) {
        self.title = payload.title;
        self.summary = payload.summary;
        self.description = payload.description;
        self.logo = payload.logo;
        self.hidden = payload.hidden;
        self.notes = payload.notes;
        self.record.lang = payload.lang;
    }
}

impl CatalogEntity for Conference {
    type Id = ConferenceId;
    type Context = ();
    type Error = ConferenceError;

    const KIND: &'static str = "Conference";

    fn blank(record: Record<ConferenceId>, scope: &Scope) -> Self {
        let content_type = scope
            .kind
            .and_then(ContentType::from_code)
            .unwrap_or_default();
        Conference::new(record, content_type)
    }

    fn record(&self) -> &Record<ConferenceId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<ConferenceId> {
        &mut self.record
    }

    fn scope(&self) -> Scope {
        Scope::of_kind(self.content_type.code())
    }
}
