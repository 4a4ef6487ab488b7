//! Dependent relations consulted by referential guards.

use crate::clients::AgreementClient;
use crate::model::OwnerId;
use async_trait::async_trait;
use resource_framework::{DependentRelation, FrameworkError};

/// Agreements signed with an owner. Inactive agreements still count: an owner stays
/// referenced for as long as any agreement row names it.
pub struct AgreementsOfOwner {
    agreements: AgreementClient,
}

impl AgreementsOfOwner {
    pub fn new(agreements: AgreementClient) -> Self {
        Self { agreements }
    }
}

#[async_trait]
impl DependentRelation<OwnerId> for AgreementsOfOwner {
    fn name(&self) -> &str {
        "agreements"
    }

    async fn is_referenced(&self, id: &OwnerId) -> Result<bool, FrameworkError> {
        let count = self.agreements.count_for_owner(*id, true).await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Agreement;
    use resource_framework::mock::MockClient;
    use resource_framework::ReferentialGuard;

    #[tokio::test]
    async fn owner_with_agreements_is_referenced() {
        let mut mock = MockClient::<Agreement>::new();
        mock.expect_referencing(1).return_ok(2);
        mock.expect_referencing(2).return_ok(0);

        let guard = ReferentialGuard::new()
            .with_relation(AgreementsOfOwner::new(AgreementClient::new(mock.client())));

        assert_eq!(
            guard.blocking_relation(&OwnerId(1)).await.unwrap().as_deref(),
            Some("agreements")
        );
        assert!(guard.can_deactivate(&OwnerId(2)).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn unreachable_agreements_fail_the_check() {
        let mut mock = MockClient::<Agreement>::new();
        mock.expect_referencing(1)
            .return_err(FrameworkError::ActorClosed);

        let relation = AgreementsOfOwner::new(AgreementClient::new(mock.client()));
        assert!(matches!(
            relation.is_referenced(&OwnerId(1)).await,
            Err(FrameworkError::ActorClosed)
        ));
    }
}
