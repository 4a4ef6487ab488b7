//! # Agreement Client
//!
//! High-level API over the `Agreement` actor: creation and removal for whoever owns
//! agreements, per-owner counting for the owner guard.
use crate::agreement_actor::AgreementError;
use crate::model::{Agreement, AgreementFields, AgreementId, OwnerId};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient, Scope};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct AgreementClient {
    inner: ResourceClient<Agreement>,
}

impl AgreementClient {
    pub fn new(inner: ResourceClient<Agreement>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_agreement(
        &self,
        fields: AgreementFields,
    ) -> Result<AgreementId, AgreementError> {
        debug!("Sending request");
        let scope = Scope::any().with_parent(fields.owner_id.into());
        Ok(self.inner.create(fields, scope).await?)
    }

    #[instrument(skip(self))]
    pub async fn remove_agreement(&self, id: AgreementId) -> Result<(), AgreementError> {
        debug!("Sending request");
        self.inner.delete(id).await?;
        Ok(())
    }

    /// Agreements signed with `owner`. Inactive agreements count too when
    /// `include_inactive` is set.
    #[instrument(skip(self))]
    pub async fn count_for_owner(
        &self,
        owner: OwnerId,
        include_inactive: bool,
    ) -> Result<u64, AgreementError> {
        Ok(self.inner.referencing(owner.into(), include_inactive).await?)
    }
}

#[async_trait]
impl ActorClient<Agreement> for AgreementClient {
    type Error = AgreementError;

    fn inner(&self) -> &ResourceClient<Agreement> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AgreementError::Framework(e)
    }
}
