use serde::Serialize;

use super::Mobile;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    name: String,
    mobile: Mobile,
}

impl User {
    pub fn new(name: impl Into<String>, mobile: impl Into<Mobile>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn mobile(&self) -> &Mobile {
        &self.mobile
    }
}
