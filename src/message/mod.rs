use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod model;

/// Sequential message id, assigned from 1 upwards.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Serialize, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Id(u64);

impl Id {
    pub const fn get(&self) -> u64 {
        self.0
    }

    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
