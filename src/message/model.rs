use serde::Serialize;

use super::Id;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: Id,
    content: String,
    timestamp: i64,
}

impl Message {
    pub(crate) fn new(id: Id, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
