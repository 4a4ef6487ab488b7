use crate::model::OwnerId;
use resource_framework::Record;
use serde::{Deserialize, Serialize};

/// A copyright owner: the party agreements are signed with.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_framework::ResourceActor); see
/// [`owner_actor`](crate::owner_actor) for the entity implementation and the
/// agreements guard that vetoes deactivation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(flatten)]
    pub record: Record<OwnerId>,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub location: String,
    pub website: String,
    pub public_address: String,
    pub public_phone: String,
    pub public_email: String,
    pub contact_name: String,
    pub contact_address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub notes: String,
}

impl Owner {
    /// An owner with no contact data yet.
    pub fn new(record: Record<OwnerId>) -> Self {
        Self {
            record,
            title: String::new(),
            summary: String::new(),
            description: String::new(),
            logo: String::new(),
            location: String::new(),
            website: String::new(),
            public_address: String::new(),
            public_phone: String::new(),
            public_email: String::new(),
            contact_name: String::new(),
            contact_address: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            notes: String::new(),
        }
    }

    pub fn id(&self) -> OwnerId {
        self.record.id
    }
}

/// Writable owner fields, as handed over by the request validator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerFields {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub logo: String,
    pub location: String,
    pub website: String,
    pub public_address: String,
    pub public_phone: String,
    pub public_email: String,
    pub contact_name: String,
    pub contact_address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub notes: String,
    pub lang: String,
}

impl OwnerFields {
    pub fn titled(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            ..Default::default()
        }
    }
}
