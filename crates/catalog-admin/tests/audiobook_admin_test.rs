use catalog_admin::config::CatalogConfig;
use catalog_admin::lifecycle::CatalogSystem;
use catalog_admin::model::{
    AgreementFields, AgreementId, ConferenceFields, ConferenceId, ContentType, OwnerId,
    RecordingFields, RecordingId, SeriesFields, SeriesId, SpeakerId,
};
use resource_framework::{ListQuery, Scope, Status};

fn english() -> ListQuery {
    ListQuery::default().lang("en")
}

#[tokio::test]
async fn audiobook_listing_only_sees_audiobooks() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let audiobooks = system.audiobook_controller();

    let reply = audiobooks.all_audiobooks(&english()).await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobooks not found."));

    let reply = audiobooks
        .create_audiobook(SeriesFields::titled("Pilgrim's Progress", "en"))
        .await;
    assert_eq!(reply.status, Status::Created);
    assert_eq!(reply.message_text(), Some("Audiobook added."));

    // a music series, created outside the audiobook surface
    system
        .series
        .create(
            SeriesFields::titled("Hymns", "en"),
            Scope::of_kind(ContentType::Music.code()),
        )
        .await
        .expect("Failed to create series");

    let page = audiobooks
        .all_audiobooks(&english())
        .await
        .into_page()
        .expect("Expected a page");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "Pilgrim's Progress");
    assert_eq!(page.items[0].content_type, ContentType::Audiobook);

    let reply = audiobooks.all_audiobooks(&ListQuery::default().lang("es")).await;
    assert_eq!(reply.message_text(), Some("Audiobooks not found."));

    let reply = audiobooks
        .update_audiobook(SeriesId(1), SeriesFields::titled("The Pilgrim's Progress", "en"))
        .await;
    assert_eq!(reply.message_text(), Some("Audiobook 1 updated."));

    let reply = audiobooks.delete_audiobook(SeriesId(1)).await;
    assert_eq!(reply.message_text(), Some("Audiobook 1 deleted."));
    let reply = audiobooks.delete_audiobook(SeriesId(1)).await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    drop(audiobooks);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn chapters_are_filtered_by_series_and_hard_deleted() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let audiobooks = system.audiobook_controller();

    audiobooks
        .create_audiobook(SeriesFields::titled("Pilgrim's Progress", "en"))
        .await;
    audiobooks
        .create_audiobook(SeriesFields::titled("Holy War", "en"))
        .await;

    let chapter = RecordingFields::new(SeriesId(1), "The Slough of Despond", "en")
        .with_speakers([SpeakerId(333), SpeakerId(2)]);
    let reply = audiobooks.create_chapter(chapter).await;
    assert_eq!(reply.code(), 201);
    assert_eq!(reply.message_text(), Some("Chapter added."));
    audiobooks
        .create_chapter(RecordingFields::new(SeriesId(1), "Vanity Fair", "en"))
        .await;
    audiobooks
        .create_chapter(RecordingFields::new(SeriesId(2), "Mansoul", "en"))
        .await;

    let reply = audiobooks
        .create_chapter(RecordingFields::new(SeriesId(9), "Lost", "en"))
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobook 9 not found."));

    let all = audiobooks
        .chapters(&english(), None)
        .await
        .into_page()
        .expect("Expected a page");
    assert_eq!(all.total, 3);

    let first_book = audiobooks
        .chapters(&english(), Some(SeriesId(1)))
        .await
        .into_page()
        .expect("Expected a page");
    let titles: Vec<_> = first_book.items.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Vanity Fair", "The Slough of Despond"]);
    assert!(first_book
        .items
        .iter()
        .all(|c| c.content_type == ContentType::Audiobook));
    assert_eq!(first_book.items[1].speaker_ids, vec![SpeakerId(333), SpeakerId(2)]);

    let reply = audiobooks.chapters(&english(), Some(SeriesId(9))).await;
    assert_eq!(reply.message_text(), Some("Chapters not found."));

    let reply = audiobooks.delete_chapter(RecordingId(1)).await;
    assert_eq!(reply.code(), 201);
    assert_eq!(reply.message_text(), Some("Chapter 1 deleted."));

    let reply = audiobooks
        .update_chapter(
            RecordingId(1),
            RecordingFields::new(SeriesId(1), "Back again", "en"),
        )
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Chapter 1 not found."));

    let remaining = audiobooks
        .chapters(&english(), Some(SeriesId(1)))
        .await
        .into_page()
        .expect("Expected a page");
    assert_eq!(remaining.total, 1);

    drop(audiobooks);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn chapters_validate_their_series_and_agreement() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let audiobooks = system.audiobook_controller();

    audiobooks
        .create_audiobook(SeriesFields::titled("Pilgrim's Progress", "en"))
        .await;

    let reply = audiobooks
        .create_chapter(
            RecordingFields::new(SeriesId(1), "Vanity Fair", "en").under_agreement(AgreementId(3)),
        )
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Agreement 3 not found."));

    let agreement = system
        .agreements
        .create_agreement(AgreementFields {
            owner_id: OwnerId(1),
            title: "Distribution".to_string(),
            notes: String::new(),
            lang: "en".to_string(),
        })
        .await
        .expect("Failed to create agreement");

    let reply = audiobooks
        .create_chapter(
            RecordingFields::new(SeriesId(1), "Vanity Fair", "en").under_agreement(agreement),
        )
        .await;
    assert_eq!(reply.message_text(), Some("Chapter added."));

    // a deactivated series takes no new chapters, and its chapters can't be edited
    audiobooks.delete_audiobook(SeriesId(1)).await;
    let reply = audiobooks
        .create_chapter(RecordingFields::new(SeriesId(1), "Doubting Castle", "en"))
        .await;
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    let reply = audiobooks
        .update_chapter(
            RecordingId(1),
            RecordingFields::new(SeriesId(1), "Vanity Fair", "en"),
        )
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    drop(audiobooks);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn conferences_group_audiobooks() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let audiobooks = system.audiobook_controller();

    let reply = audiobooks.conferences(&english()).await;
    assert_eq!(reply.message_text(), Some("Conferences not found."));

    let reply = audiobooks
        .create_audiobook(
            SeriesFields::titled("Pilgrim's Progress", "en").in_conference(ConferenceId(9)),
        )
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Conference 9 not found."));

    let reply = audiobooks
        .create_conference(ConferenceFields::titled("Puritan Classics", "en"))
        .await;
    assert_eq!(reply.message_text(), Some("Conference added."));

    let reply = audiobooks
        .create_audiobook(
            SeriesFields::titled("Pilgrim's Progress", "en").in_conference(ConferenceId(1)),
        )
        .await;
    assert_eq!(reply.code(), 201);

    let book = system
        .series
        .get(SeriesId(1))
        .await
        .expect("Failed to get series");
    assert_eq!(book.conference_id, Some(ConferenceId(1)));

    let reply = audiobooks
        .update_conference(ConferenceId(1), ConferenceFields::titled("Puritans", "en"))
        .await;
    assert_eq!(reply.message_text(), Some("Conference 1 updated."));

    let page = audiobooks
        .conferences(&english())
        .await
        .into_page()
        .expect("Expected a page");
    assert_eq!(page.items[0].title, "Puritans");
    assert_eq!(page.items[0].content_type, ContentType::Audiobook);

    let reply = audiobooks.delete_conference(ConferenceId(1)).await;
    assert_eq!(reply.message_text(), Some("Conference 1 deleted."));
    let reply = audiobooks.conferences(&english()).await;
    assert_eq!(reply.code(), 404);

    drop(audiobooks);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn other_content_types_are_out_of_reach() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let audiobooks = system.audiobook_controller();
    let presentations = Scope::of_kind(ContentType::Presentation.code());

    let lecture = system
        .series
        .create(SeriesFields::titled("Lectures", "en"), presentations)
        .await
        .expect("Failed to create series");
    let talks = system
        .conferences
        .create(ConferenceFields::titled("Talks", "en"), presentations)
        .await
        .expect("Failed to create conference");

    let reply = audiobooks
        .update_audiobook(lecture, SeriesFields::titled("Hijacked", "en"))
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    let reply = audiobooks.delete_audiobook(lecture).await;
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    let reply = audiobooks
        .create_chapter(RecordingFields::new(lecture, "Intro", "en"))
        .await;
    assert_eq!(reply.code(), 404);
    assert_eq!(reply.message_text(), Some("Audiobook 1 not found."));

    let reply = audiobooks
        .create_audiobook(SeriesFields::titled("Pilgrim's Progress", "en").in_conference(talks))
        .await;
    assert_eq!(reply.message_text(), Some("Conference 1 not found."));

    let reply = audiobooks.delete_conference(talks).await;
    assert_eq!(reply.message_text(), Some("Conference 1 not found."));

    let series = system.series.get(lecture).await.expect("Failed to get series");
    assert_eq!(series.title, "Lectures");
    assert!(series.record.active);
    assert!(system.conferences.get(talks).await.is_ok());

    // a presentation chapter, created outside the audiobook surface
    system
        .recordings
        .create(RecordingFields::new(lecture, "Intro", "en"), presentations)
        .await
        .expect("Failed to create recording");
    let reply = audiobooks.delete_chapter(RecordingId(1)).await;
    assert_eq!(reply.message_text(), Some("Chapter 1 not found."));
    assert!(system.recordings.get(RecordingId(1)).await.is_ok());

    drop(audiobooks);
    system.shutdown().await.expect("Shutdown failed");
}
