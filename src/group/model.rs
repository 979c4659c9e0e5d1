use serde::Serialize;

use crate::user::{self, model::User};

use super::{Id, Kind};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    id: Id,
    name: String,
    size: usize,
    kind: Kind,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            id: Id::random(),
            name: name.into(),
            size,
            kind: Kind::of_size(size),
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn kind(&self) -> &Kind {
        &self.kind
    }
}

/// Read view of a group together with its relationships.
#[derive(Serialize, Clone, Debug)]
pub struct GroupSummary {
    id: Id,
    name: String,
    kind: Kind,
    admin: user::Mobile,
    members: Vec<User>,
    message_count: usize,
}

impl GroupSummary {
    pub fn new(group: &Group, admin: &User, members: &[User], message_count: usize) -> Self {
        Self {
            id: *group.id(),
            name: group.name().to_owned(),
            kind: *group.kind(),
            admin: admin.mobile().clone(),
            members: members.to_vec(),
            message_count,
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    pub const fn admin(&self) -> &user::Mobile {
        &self.admin
    }

    pub fn members(&self) -> &[User] {
        &self.members
    }

    pub const fn message_count(&self) -> usize {
        self.message_count
    }
}
