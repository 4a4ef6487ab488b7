//! # Field Mapping
//!
//! A [`FieldMapper`] copies a validated request payload onto an entity. The payload
//! type only carries the fields an entity declares as writable, which keeps internal
//! columns (`id`, `active`, `created`, scoping discriminators) out of reach of request
//! data.
//!
//! Mapping never persists anything; the actor decides when the mapped entity is
//! written back to its store.

use std::fmt::Debug;

/// Copies a fixed, entity-specific field set from a payload onto `self`.
///
/// ```rust
/// use resource_framework::FieldMapper;
///
/// #[derive(Debug, Default)]
/// struct Speaker { name: String, bio: String, internal_rank: u32 }
///
/// #[derive(Debug)]
/// struct SpeakerFields { name: String, bio: String }
///
/// impl FieldMapper for Speaker {
///     type Payload = SpeakerFields;
///
///     fn map_fields(&mut self, payload: SpeakerFields) {
///         self.name = payload.name;
///         self.bio = payload.bio;
///     }
/// }
///
/// let mut speaker = Speaker { internal_rank: 9, ..Default::default() };
/// speaker.map_fields(SpeakerFields { name: "Ann".into(), bio: "Pastor".into() });
/// assert_eq!(speaker.name, "Ann");
/// assert_eq!(speaker.internal_rank, 9);
/// ```
pub trait FieldMapper {
    /// The validated request payload (the writable field set).
    type Payload: Send + Sync + Debug;

    /// Overwrite every declared field with the payload's value.
    fn map_fields(&mut self, payload: Self::Payload);
}
