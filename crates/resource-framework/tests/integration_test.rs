use async_trait::async_trait;
use resource_framework::{
    CatalogEntity, Deletion, DeletionPolicy, DependentRelation, FieldMapper, FrameworkError,
    ListFilter, PaginatedLister, Record, ReferentialGuard, ResourceActor, ResourceClient, Scope,
};

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Track {
    record: Record<u32>,
    title: String,
    rank: u32,
    album: Option<u32>,
    kind: u32,
}

#[derive(Debug)]
struct TrackFields {
    title: String,
    lang: String,
}

#[derive(Debug, thiserror::Error)]
enum TrackError {
    #[error("Track title can not be empty.")]
    EmptyTitle,
}

impl From<TrackError> for FrameworkError {
    fn from(e: TrackError) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }
}

impl FieldMapper for Track {
    type Payload = TrackFields;

    fn map_fields(&mut self, payload: TrackFields) {
        self.title = payload.title;
        self.record.lang = payload.lang;
    }
}

#[async_trait]
impl CatalogEntity for Track {
    type Id = u32;
    type Context = ();
    type Error = TrackError;

    const KIND: &'static str = "Track";
    const DELETION: DeletionPolicy = DeletionPolicy::Remove;

    fn blank(record: Record<u32>, scope: &Scope) -> Self {
        Self {
            record,
            title: String::new(),
            rank: 7,
            album: scope.parent,
            kind: scope.kind.unwrap_or_default(),
        }
    }

    fn record(&self) -> &Record<u32> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<u32> {
        &mut self.record
    }

    fn scope(&self) -> Scope {
        Scope {
            kind: Some(self.kind),
            parent: self.album,
        }
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), TrackError> {
        self.validate()
    }

    async fn on_update(&mut self, _ctx: &()) -> Result<(), TrackError> {
        self.validate()
    }
}

impl Track {
    fn validate(&self) -> Result<(), TrackError> {
        if self.title.is_empty() {
            return Err(TrackError::EmptyTitle);
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct Album {
    record: Record<u32>,
}

#[derive(Debug)]
struct AlbumFields {
    lang: String,
}

#[derive(Debug, thiserror::Error)]
#[error("album error")]
struct AlbumError;

impl From<AlbumError> for FrameworkError {
    fn from(e: AlbumError) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }
}

impl FieldMapper for Album {
    type Payload = AlbumFields;

    fn map_fields(&mut self, payload: AlbumFields) {
        self.record.lang = payload.lang;
    }
}

impl CatalogEntity for Album {
    type Id = u32;
    type Context = ReferentialGuard<u32>;
    type Error = AlbumError;

    const KIND: &'static str = "Album";

    fn blank(record: Record<u32>, _scope: &Scope) -> Self {
        Self { record }
    }

    fn record(&self) -> &Record<u32> {
        &self.record
    }

    fn record_mut(&mut self) -> &mut Record<u32> {
        &mut self.record
    }

    fn guard(ctx: &ReferentialGuard<u32>) -> Option<&ReferentialGuard<u32>> {
        Some(ctx)
    }
}

struct TracksOnAlbum(ResourceClient<Track>);

#[async_trait]
impl DependentRelation<u32> for TracksOnAlbum {
    fn name(&self) -> &str {
        "tracks"
    }

    async fn is_referenced(&self, id: &u32) -> Result<bool, FrameworkError> {
        Ok(self.0.referencing(*id, false).await? > 0)
    }
}

fn track(title: &str) -> TrackFields {
    TrackFields {
        title: title.into(),
        lang: "en".into(),
    }
}

fn spawn_tracks(page_size: u64) -> ResourceClient<Track> {
    let (actor, client) = ResourceActor::<Track>::new(10, PaginatedLister::new(page_size));
    tokio::spawn(actor.run(()));
    client
}

// --- Tests ---

#[tokio::test]
async fn create_activates_and_keeps_unmapped_fields() {
    let tracks = spawn_tracks(10);

    let id = tracks
        .create(track("Overture"), Scope::of_kind(3).with_parent(5))
        .await
        .unwrap();
    let stored = tracks.get(id).await.unwrap();

    assert!(stored.record.active);
    assert_eq!(stored.title, "Overture");
    assert_eq!(stored.rank, 7);
    assert_eq!(stored.scope(), Scope::of_kind(3).with_parent(5));
}

#[tokio::test]
async fn failed_create_does_not_consume_an_id() {
    let tracks = spawn_tracks(10);

    let err = tracks.create(track(""), Scope::any()).await.unwrap_err();
    assert_eq!(err.to_string(), "Entity error: Track title can not be empty.");

    let id = tracks.create(track("Prelude"), Scope::any()).await.unwrap();
    assert_eq!(id, 1);
}

#[tokio::test]
async fn failed_update_leaves_the_row_untouched() {
    let tracks = spawn_tracks(10);
    let id = tracks.create(track("Prelude"), Scope::any()).await.unwrap();

    assert!(tracks.update(id, track("")).await.is_err());
    assert_eq!(tracks.get(id).await.unwrap().title, "Prelude");

    let updated = tracks.update(id, track("Fugue")).await.unwrap();
    assert_eq!(updated.title, "Fugue");
    assert_eq!(updated.record.created, tracks.get(id).await.unwrap().record.created);
}

#[tokio::test]
async fn remove_policy_erases_the_row() {
    let tracks = spawn_tracks(10);
    let id = tracks.create(track("Coda"), Scope::any()).await.unwrap();

    assert_eq!(tracks.delete(id).await.unwrap(), Deletion::Removed);
    assert!(tracks.get(id).await.unwrap_err().is_missing("Track", id));
    assert!(tracks.delete(id).await.unwrap_err().is_missing("Track", id));
}

#[tokio::test]
async fn list_is_scoped_and_paginated() {
    let tracks = spawn_tracks(2);
    for n in 0..3 {
        tracks
            .create(track(&format!("a{n}")), Scope::of_kind(1).with_parent(10))
            .await
            .unwrap();
    }
    tracks
        .create(track("b"), Scope::of_kind(1).with_parent(11))
        .await
        .unwrap();
    tracks
        .create(track("c"), Scope::of_kind(2).with_parent(10))
        .await
        .unwrap();

    let filter = ListFilter::new("en").within(Scope::of_kind(1).with_parent(10));
    let first = tracks.list(filter.clone(), 1).await.unwrap();
    assert_eq!(first.total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first.items[0].title, "a2");

    let second = tracks.list(filter, 2).await.unwrap();
    let titles: Vec<&str> = second.items.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a0"]);

    let other_lang = tracks
        .list(ListFilter::new("de").within(Scope::of_kind(1)), 1)
        .await
        .unwrap();
    assert!(other_lang.is_empty());
}

#[tokio::test]
async fn guard_blocks_deactivation_while_referenced() {
    let tracks = spawn_tracks(10);
    let (actor, albums) = ResourceActor::<Album>::new(10, PaginatedLister::new(10));
    let guard = ReferentialGuard::new().with_relation(TracksOnAlbum(tracks.clone()));
    tokio::spawn(actor.run(guard));

    let album = albums
        .create(AlbumFields { lang: "en".into() }, Scope::any())
        .await
        .unwrap();
    let on_album = tracks
        .create(track("Intro"), Scope::any().with_parent(album))
        .await
        .unwrap();

    let err = albums.delete(album).await.unwrap_err();
    assert!(matches!(
        &err,
        FrameworkError::Referenced { relation, .. } if relation == "tracks"
    ));
    assert!(albums.get(album).await.is_ok());

    tracks.delete(on_album).await.unwrap();
    assert_eq!(albums.delete(album).await.unwrap(), Deletion::Deactivated);
    assert!(albums.get(album).await.unwrap_err().is_missing("Album", album));
    assert!(albums.update(album, AlbumFields { lang: "en".into() }).await.is_err());
}

#[tokio::test]
async fn dropped_actor_reports_closed() {
    let (actor, client) = ResourceActor::<Track>::new(1, PaginatedLister::new(10));
    drop(actor);

    assert!(matches!(
        client.get(1).await,
        Err(FrameworkError::ActorClosed)
    ));
}
