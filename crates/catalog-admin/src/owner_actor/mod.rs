//! # Owner Actor
//!
//! Copyright owners. Deleting an owner deactivates it, unless an agreement still
//! references it: the actor's context is a [`ReferentialGuard`] whose single relation,
//! [`AgreementsOfOwner`], asks the agreement actor.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_admin::config::CatalogConfig;
//! use catalog_admin::model::{AgreementFields, OwnerFields};
//! use catalog_admin::{agreement_actor, owner_actor};
//! use catalog_admin::clients::AgreementClient;
//! use resource_framework::{FrameworkError, Scope};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CatalogConfig::default();
//!     let (agreement_actor, agreements) = agreement_actor::new(&config);
//!     let agreements = AgreementClient::new(agreements);
//!     let (owner_actor, owners) = owner_actor::new(&config);
//!     tokio::spawn(agreement_actor.run(()));
//!     tokio::spawn(owner_actor.run(owner_actor::guard(agreements.clone())));
//!
//!     let owner = owners.create(OwnerFields::titled("Hope Press", "en"), Scope::any()).await.unwrap();
//!     agreements
//!         .create_agreement(AgreementFields {
//!             owner_id: owner,
//!             title: "Distribution".into(),
//!             notes: String::new(),
//!             lang: "en".into(),
//!         })
//!         .await
//!         .unwrap();
//!
//!     let err = owners.delete(owner).await.unwrap_err();
//!     assert!(matches!(err, FrameworkError::Referenced { .. }));
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AgreementClient;
use crate::config::CatalogConfig;
use crate::model::{Owner, OwnerId};
use crate::relations::AgreementsOfOwner;
use resource_framework::{ReferentialGuard, ResourceActor, ResourceClient};

/// Creates a new Owner actor and its client.
pub fn new(config: &CatalogConfig) -> (ResourceActor<Owner>, ResourceClient<Owner>) {
    ResourceActor::new(config.channel_capacity, config.lister())
}

/// The owner actor's context: deactivation is vetoed while agreements exist.
pub fn guard(agreements: AgreementClient) -> ReferentialGuard<OwnerId> {
    ReferentialGuard::new().with_relation(AgreementsOfOwner::new(agreements))
}
