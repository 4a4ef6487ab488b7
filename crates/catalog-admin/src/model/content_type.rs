use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Discriminator shared by series, recordings and conferences.
///
/// Each administration surface is pinned to one content type; the numeric code is
/// what rows are scoped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Presentation,
    Music,
    Audiobook,
    Story,
}

impl ContentType {
    pub const fn code(self) -> u32 {
        match self {
            ContentType::Presentation => 1,
            ContentType::Music => 2,
            ContentType::Audiobook => 3,
            ContentType::Story => 4,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ContentType::Presentation),
            2 => Some(ContentType::Music),
            3 => Some(ContentType::Audiobook),
            4 => Some(ContentType::Story),
            _ => None,
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Presentation => "presentation",
            ContentType::Music => "music",
            ContentType::Audiobook => "audiobook",
            ContentType::Story => "story",
        };
        f.write_str(name)
    }
}
