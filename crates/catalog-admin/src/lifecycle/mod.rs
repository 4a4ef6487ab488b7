//! # System Lifecycle
//!
//! [`CatalogSystem`] creates every actor, wires their contexts and shuts them down.
//!
//! The dependency graph is acyclic:
//!
//! ```text
//! owner ──▶ agreement ◀── recording ──▶ series ──▶ conference
//! ```
//!
//! so dropping the system's clients closes the channels from the top down: each
//! actor exits once every client pointing at it, including the clones held in other
//! actors' contexts, is gone.

use crate::clients::{AgreementClient, ConferenceClient, SeriesClient};
use crate::config::CatalogConfig;
use crate::controllers::{AudiobookController, OwnerController};
use crate::model::{Conference, Owner, Recording, Series};
use crate::recording_actor::RecordingContext;
use crate::{agreement_actor, conference_actor, owner_actor, recording_actor, series_actor};
use resource_framework::ResourceClient;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// The running catalog: one actor per resource plus the clients to reach them.
///
/// # Example
///
/// ```rust
/// use catalog_admin::config::CatalogConfig;
/// use catalog_admin::lifecycle::CatalogSystem;
/// use catalog_admin::model::OwnerFields;
/// use resource_framework::Status;
///
/// #[tokio::main]
/// async fn main() {
///     let system = CatalogSystem::new(&CatalogConfig::default());
///     let owners = system.owner_controller();
///
///     let reply = owners.create(OwnerFields::titled("Hope Press", "en")).await;
///     assert_eq!(reply.status, Status::Created);
///
///     drop(owners);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    pub owners: ResourceClient<Owner>,
    pub agreements: AgreementClient,
    pub series: ResourceClient<Series>,
    pub recordings: ResourceClient<Recording>,
    pub conferences: ResourceClient<Conference>,
    default_lang: String,
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    pub fn new(config: &CatalogConfig) -> Self {
        let (agreement_actor, agreements) = agreement_actor::new(config);
        let (conference_actor, conferences) = conference_actor::new(config);
        let (series_actor, series) = series_actor::new(config);
        let (recording_actor, recordings) = recording_actor::new(config);
        let (owner_actor, owners) = owner_actor::new(config);
        let agreements = AgreementClient::new(agreements);

        let handles = vec![
            tokio::spawn(agreement_actor.run(())),
            tokio::spawn(conference_actor.run(())),
            tokio::spawn(series_actor.run(ConferenceClient::new(conferences.clone()))),
            tokio::spawn(recording_actor.run(RecordingContext {
                series: SeriesClient::new(series.clone()),
                agreements: agreements.clone(),
            })),
            tokio::spawn(owner_actor.run(owner_actor::guard(agreements.clone()))),
        ];
        info!(actors = handles.len(), "Catalog system started");

        Self {
            owners,
            agreements,
            series,
            recordings,
            conferences,
            default_lang: config.default_lang.clone(),
            handles,
        }
    }

    pub fn owner_controller(&self) -> OwnerController {
        OwnerController::new(self.owners.clone(), self.default_lang.clone())
    }

    pub fn audiobook_controller(&self) -> AudiobookController {
        AudiobookController::new(
            self.series.clone(),
            self.recordings.clone(),
            self.conferences.clone(),
            self.default_lang.clone(),
        )
    }

    /// Drops the clients and waits for every actor to exit.
    ///
    /// Controllers hold client clones: drop them first, or this waits forever.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down catalog system...");

        drop(self.owners);
        drop(self.recordings);
        drop(self.series);
        drop(self.conferences);
        drop(self.agreements);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
