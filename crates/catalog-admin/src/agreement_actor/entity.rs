use super::AgreementError;
use crate::model::{Agreement, AgreementFields, AgreementId, OwnerId};
use resource_framework::{CatalogEntity, DeletionPolicy, FieldMapper, Record, Scope};

impl FieldMapper for Agreement {
    type Payload = AgreementFields;

    fn map_fields(&mut self, payload: AgreementFields) {
        self.owner_id = payload.owner_id;
        self.title = payload.title;
        self.notes = payload.notes;
        self.record.lang = payload.lang;
    }
}

/// Agreements point at their owner through `Scope::parent`, which is what
/// `count_referencing` matches on.
impl CatalogEntity for Agreement {
    type Id = AgreementId;
    type Context = ();
    type Error = AgreementError;

    const KIND: &'static str = "Agreement";
    const DELETION: DeletionPolicy = DeletionPolicy::Remove;

    fn blank(record: Record<AgreementId>, scope: &Scope) -> Self {
        Self {
            record,
            owner_id: OwnerId(scope.parent.unwrap_or_default()),
            title: String::new(),
            notes: String::new(),
        }
    }

    fn record(&self) -> &Record<AgreementId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<AgreementId> {
        &mut self.record
    }

    fn scope(&self) -> Scope {
        Scope::any().with_parent(self.owner_id.into())
    }
}
