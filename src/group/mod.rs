use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod model;

/// Custom groups are named with this prefix followed by their 1-based sequence number.
pub const CUSTOM_NAME_PREFIX: &str = "Group ";

#[derive(Clone, Copy, Debug, Deserialize, Serialize, Hash, PartialEq, Eq)]
pub struct Id(Uuid);

impl Id {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Kind {
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "group")]
    Group,
}

impl Kind {
    /// Two members make a personal chat, anything larger is a custom group.
    pub const fn of_size(size: usize) -> Self {
        if size <= 2 { Self::Chat } else { Self::Group }
    }

    pub const fn as_str(&self) -> &str {
        match self {
            Self::Chat => "chat",
            Self::Group => "group",
        }
    }
}
