//! [`CatalogEntity`] implementation for [`Owner`].
//!
//! Owners are soft-deleted, and only once no agreement references them.

use super::OwnerError;
use crate::model::{Owner, OwnerFields, OwnerId};
use resource_framework::{CatalogEntity, FieldMapper, Record, ReferentialGuard, Scope};

impl FieldMapper for Owner {
    type Payload = OwnerFields;

    fn map_fields(&mut self, payload: OwnerFields) {
        self.title = payload.title;
        self.summary = payload.summary;
        self.description = payload.description;
        self.logo = payload.logo;
        self.location = payload.location;
        self.website = payload.website;
        self.public_address = payload.public_address;
        self.public_phone = payload.public_phone;
        self.public_email = payload.public_email;
        self.contact_name = payload.contact_name;
        self.contact_address = payload.contact_address;
        self.contact_phone = payload.contact_phone;
        self.contact_email = payload.contact_email;
        self.notes = payload.notes;
        self.record.lang = payload.lang;
    }
}

impl CatalogEntity for Owner {
    type Id = OwnerId;
    type Context = ReferentialGuard<OwnerId>;
    type Error = OwnerError;

    const KIND: &'static str = "Owner";

    fn blank(record: Record<OwnerId>, _scope: &Scope) -> Self {
        Owner::new(record)
    }

    fn record(&self) -> &Record<OwnerId> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<OwnerId> {
        &mut self.record
    }

    fn guard(ctx: &ReferentialGuard<OwnerId>) -> Option<&ReferentialGuard<OwnerId>> {
        Some(ctx)
    }
}
