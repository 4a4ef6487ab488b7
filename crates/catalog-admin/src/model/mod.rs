//! Catalog rows and the payloads that write them.
//!
//! Each entity pairs with a `*Fields` payload holding exactly its writable columns;
//! the `CatalogEntity` implementations live in the matching `*_actor` module.

pub mod agreement;
pub mod conference;
pub mod content_type;
pub mod ids;
pub mod owner;
pub mod recording;
pub mod series;

pub use agreement::{Agreement, AgreementFields};
pub use conference::{Conference, ConferenceFields};
pub use content_type::ContentType;
pub use ids::{AgreementId, ConferenceId, OwnerId, RecordingId, SeriesId, SpeakerId};
pub use owner::{Owner, OwnerFields};
pub use recording::{Recording, RecordingFields};
pub use series::{Series, SeriesFields};
