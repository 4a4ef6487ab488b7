//! # Catalog Admin
//!
//! Walks the administration flows end to end against an in-process catalog:
//! owners guarded by agreements, then audiobooks with their chapters.
//!
//! ```bash
//! RUST_LOG=info cargo run -p catalog-admin
//! CATALOG_PAGE_SIZE=2 RUST_LOG=debug cargo run -p catalog-admin
//! ```

use catalog_admin::config::CatalogConfig;
use catalog_admin::lifecycle::CatalogSystem;
use catalog_admin::model::{
    AgreementFields, ContentType, OwnerFields, RecordingFields, SeriesFields, SeriesId, SpeakerId,
};
use resource_framework::tracing::setup_tracing;
use resource_framework::{ListQuery, Reply};
use std::error::Error;
use tracing::{info, warn, Instrument};

fn report<T>(operation: &str, reply: &Reply<T>) {
    let detail = reply.message_text().unwrap_or("ok");
    if reply.status.is_success() {
        info!(operation, status = reply.code(), detail, "Reply");
    } else {
        warn!(operation, status = reply.code(), detail, "Reply");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = CatalogConfig::load()?;
    info!(?config, "Starting catalog admin");

    let system = CatalogSystem::new(&config);
    let owners = system.owner_controller();
    let audiobooks = system.audiobook_controller();
    let lang = config.default_lang.clone();

    async {
        report("create owner", &owners.create(OwnerFields::titled("Hope Press", &lang)).await);

        let listing = owners.all(1).await;
        report("list owners", &listing);
        let Some(owner) = listing.into_page().and_then(|page| page.items.into_iter().next()) else {
            return;
        };

        let agreement = match system
            .agreements
            .create_agreement(AgreementFields {
                owner_id: owner.id(),
                title: "Distribution".into(),
                notes: String::new(),
                lang: lang.clone(),
            })
            .await
        {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Agreement creation failed");
                return;
            }
        };

        report("delete referenced owner", &owners.delete(owner.id()).await);
        if let Err(e) = system.agreements.remove_agreement(agreement).await {
            warn!(error = %e, "Agreement removal failed");
        }
        report("delete owner", &owners.delete(owner.id()).await);
        report("show deleted owner", &owners.one(owner.id()).await);
    }
    .instrument(tracing::info_span!("owners"))
    .await;

    async {
        let query = ListQuery::default().lang(lang.clone());
        report(
            "create audiobook",
            &audiobooks
                .create_audiobook(SeriesFields::titled("Pilgrim's Progress", &lang))
                .await,
        );

        let listing = audiobooks.all_audiobooks(&query).await;
        report("list audiobooks", &listing);
        let Some(book) = listing.into_page().and_then(|page| page.items.into_iter().next()) else {
            return;
        };
        info!(id = %book.id(), content_type = %ContentType::Audiobook, "Audiobook ready");

        for title in ["The Slough of Despond", "Vanity Fair"] {
            let chapter =
                RecordingFields::new(book.id(), title, &lang).with_speakers([SpeakerId(1)]);
            report("create chapter", &audiobooks.create_chapter(chapter).await);
        }
        report(
            "create orphan chapter",
            &audiobooks
                .create_chapter(RecordingFields::new(SeriesId(999), "Lost", &lang))
                .await,
        );

        let chapters = audiobooks.chapters(&query, Some(book.id())).await;
        report("list chapters", &chapters);
        if let Some(first) = chapters.into_page().and_then(|page| page.items.into_iter().next()) {
            report("delete chapter", &audiobooks.delete_chapter(first.id()).await);
        }
        report("delete audiobook", &audiobooks.delete_audiobook(book.id()).await);
    }
    .instrument(tracing::info_span!("audiobooks"))
    .await;

    drop(owners);
    drop(audiobooks);
    system.shutdown().await?;

    info!("Catalog admin completed");
    Ok(())
}
