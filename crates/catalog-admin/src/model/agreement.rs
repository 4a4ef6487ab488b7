use crate::model::{AgreementId, OwnerId};
use resource_framework::Record;
use serde::{Deserialize, Serialize};

/// Distribution agreement with an owner.
///
/// Agreements are maintained elsewhere; the catalog only needs to create them, look
/// them up and count them per owner so an owner with agreements can't be deactivated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    #[serde(flatten)]
    pub record: Record<AgreementId>,
    pub owner_id: OwnerId,
    pub title: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementFields {
    pub owner_id: OwnerId,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    pub lang: String,
}
