use std::collections::HashMap;

use crate::group::{self, model::Group};
use crate::message::{self, model::Message};
use crate::user::{self, model::User};

/// Entities plus the association tables between them. Applies no rules of its own.
#[derive(Default)]
pub struct DirectoryRepository {
    users: HashMap<user::Mobile, User>,
    groups: HashMap<group::Id, Group>,
    members: HashMap<group::Id, Vec<User>>,
    admins: HashMap<group::Id, user::Mobile>,
    group_messages: HashMap<group::Id, Vec<message::Id>>,
    senders: HashMap<message::Id, user::Mobile>,
    messages: HashMap<message::Id, Message>,
    custom_group_count: usize,
    last_message_id: message::Id,
}

impl DirectoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DirectoryRepository {
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.mobile().clone(), user);
    }

    pub fn find_user(&self, mobile: &user::Mobile) -> Option<&User> {
        self.users.get(mobile)
    }

    pub fn user_exists(&self, mobile: &user::Mobile) -> bool {
        self.users.contains_key(mobile)
    }
}

impl DirectoryRepository {
    /// Increments the custom group sequence and returns the new value.
    pub fn next_custom_group_number(&mut self) -> usize {
        self.custom_group_count += 1;
        self.custom_group_count
    }

    pub const fn custom_group_count(&self) -> usize {
        self.custom_group_count
    }

    /// Stores the group with its member list; the first member becomes admin.
    pub fn insert_group(&mut self, group: Group, members: Vec<User>) {
        assert!(!members.is_empty());

        let id = *group.id();
        self.admins.insert(id, members[0].mobile().clone());
        self.members.insert(id, members);
        self.group_messages.insert(id, vec![]);
        self.groups.insert(id, group);
    }

    pub fn group_exists(&self, id: &group::Id) -> bool {
        self.groups.contains_key(id)
    }

    pub fn find_group(&self, id: &group::Id) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn find_members(&self, id: &group::Id) -> Option<&[User]> {
        self.members.get(id).map(Vec::as_slice)
    }

    pub fn find_admin(&self, id: &group::Id) -> Option<&user::Mobile> {
        self.admins.get(id)
    }

    pub fn set_admin(&mut self, id: &group::Id, mobile: user::Mobile) {
        self.admins.insert(*id, mobile);
    }
}

impl DirectoryRepository {
    pub fn next_message_id(&mut self) -> message::Id {
        self.last_message_id = self.last_message_id.next();
        self.last_message_id
    }

    pub const fn last_message_id(&self) -> &message::Id {
        &self.last_message_id
    }

    pub fn insert_message(&mut self, message: Message) {
        self.messages.insert(*message.id(), message);
    }

    pub fn find_message(&self, id: &message::Id) -> Option<&Message> {
        self.messages.get(id)
    }

    /// Records the sender and appends to the group's sequence, returning the new length.
    pub fn append_message(
        &mut self,
        group_id: &group::Id,
        message_id: &message::Id,
        sender: &user::Mobile,
    ) -> usize {
        self.senders.insert(*message_id, sender.clone());

        let messages = self.group_messages.entry(*group_id).or_default();
        messages.push(*message_id);
        messages.len()
    }

    pub fn find_messages(&self, id: &group::Id) -> Option<&[message::Id]> {
        self.group_messages.get(id).map(Vec::as_slice)
    }

    pub fn find_sender(&self, id: &message::Id) -> Option<&user::Mobile> {
        self.senders.get(id)
    }
}
