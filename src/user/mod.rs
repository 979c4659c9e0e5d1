use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod model;

/// Mobile number, the natural unique key of a user.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mobile(String);

impl Mobile {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Mobile {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Mobile {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Mobile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Mobile {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Mobile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Mobile, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Mobile(s))
    }
}
