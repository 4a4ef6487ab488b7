//! Type-safe identifiers for catalog rows.
//!
//! Every id wraps the integer allocated by its actor and displays as the bare number,
//! so reply messages read `Owner 3 deleted.`.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Copyright owner.
    OwnerId
);
catalog_id!(
    /// Distribution agreement signed with an owner.
    AgreementId
);
catalog_id!(
    /// Series, exposed as an audiobook by the audiobook surface.
    SeriesId
);
catalog_id!(
    /// Recording, exposed as a chapter by the audiobook surface.
    RecordingId
);
catalog_id!(ConferenceId);
catalog_id!(SpeakerId);
