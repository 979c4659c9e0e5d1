use log::{debug, warn};

use crate::group::{self, CUSTOM_NAME_PREFIX, model::Group, model::GroupSummary};
use crate::message::{self, model::Message};
use crate::user::{self, model::User};

use super::repository::DirectoryRepository;
use super::{Error, Result};

/// Users, groups and messages together with the rules that bind them.
///
/// Mutating operations take `&mut self` and are all-or-nothing: a rejected
/// call leaves every table untouched. Share across threads behind one lock.
#[derive(Default)]
pub struct Directory {
    repo: DirectoryRepository,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Directory {
    pub fn register(
        &mut self,
        name: impl Into<String>,
        mobile: impl Into<user::Mobile>,
    ) -> Result<User> {
        let user = User::new(name, mobile);

        if self.repo.user_exists(user.mobile()) {
            warn!("user already exists: {}", user.mobile());
            return Err(Error::DuplicateUser(user.mobile().clone()));
        }

        self.repo.insert_user(user.clone());
        debug!("registered user {}", user.mobile());

        Ok(user)
    }

    /// Creates a group whose admin is the first of `members`.
    ///
    /// Two members make a personal chat named after the second member.
    /// Larger groups take the next custom name, `Group 1`, `Group 2` and so on.
    /// Personal chats never consume a custom group number.
    ///
    /// # Panics
    ///
    /// When fewer than two members are given.
    pub fn create_group(&mut self, members: &[User]) -> Group {
        assert!(
            members.len() >= 2,
            "group needs at least 2 members, got {}",
            members.len()
        );

        let name = match group::Kind::of_size(members.len()) {
            group::Kind::Chat => members[1].name().to_owned(),
            group::Kind::Group => {
                let n = self.repo.next_custom_group_number();
                format!("{CUSTOM_NAME_PREFIX}{n}")
            }
        };

        let group = Group::new(name, members.len());
        self.repo.insert_group(group.clone(), members.to_vec());
        debug!(
            "created {} '{}' ({})",
            group.kind().as_str(),
            group.name(),
            group.id()
        );

        group
    }

    /// Stores a new message and returns its id. The n-th call returns n.
    pub fn create_message(&mut self, content: impl Into<String>) -> message::Id {
        let id = self.repo.next_message_id();
        self.repo.insert_message(Message::new(id, content));
        debug!("created message {id}");

        id
    }

    /// Sends `message` from `sender` into `group` and returns the group's message count.
    pub fn send(&mut self, message: &Message, sender: &User, group: &Group) -> Result<usize> {
        let validator = Validator::new(&self.repo);
        validator
            .check_group(group.id())
            .and_then(|_| validator.check_member(group.id(), sender.mobile()))
            .and_then(|_| validator.check_message(message))
            .and_then(|_| validator.check_unsent(message.id()))
            .inspect_err(|e| warn!("rejected send to {}: {e}", group.id()))?;

        let count = self
            .repo
            .append_message(group.id(), message.id(), sender.mobile());
        debug!(
            "message {} sent by {} to {}, count: {count}",
            message.id(),
            sender.mobile(),
            group.id()
        );

        Ok(count)
    }

    /// Hands admin rights over `group` from `approver` to `new_admin`.
    ///
    /// The target is checked before the approver, so a request failing both
    /// reports [`Error::NotAParticipant`].
    pub fn transfer_admin(
        &mut self,
        approver: &User,
        new_admin: &User,
        group: &Group,
    ) -> Result<()> {
        let validator = Validator::new(&self.repo);
        validator
            .check_group(group.id())
            .and_then(|_| validator.check_participant(group.id(), new_admin.mobile()))
            .and_then(|_| validator.check_admin(group.id(), approver.mobile()))
            .inspect_err(|e| warn!("rejected admin transfer in {}: {e}", group.id()))?;

        self.repo.set_admin(group.id(), new_admin.mobile().clone());
        debug!(
            "admin of {} transferred from {} to {}",
            group.id(),
            approver.mobile(),
            new_admin.mobile()
        );

        Ok(())
    }
}

impl Directory {
    pub fn find_user(&self, mobile: &user::Mobile) -> Option<&User> {
        self.repo.find_user(mobile)
    }

    pub fn find_message(&self, id: &message::Id) -> Option<&Message> {
        self.repo.find_message(id)
    }

    pub fn find_group(&self, id: &group::Id) -> Option<&Group> {
        self.repo.find_group(id)
    }

    pub fn members(&self, group: &Group) -> Result<&[User]> {
        self.repo
            .find_members(group.id())
            .ok_or(Error::GroupNotFound(*group.id()))
    }

    pub fn admin(&self, group: &Group) -> Result<&User> {
        let members = self.members(group)?;
        let admin = self
            .repo
            .find_admin(group.id())
            .ok_or(Error::GroupNotFound(*group.id()))?;

        // admin is always one of the members
        members
            .iter()
            .find(|m| m.mobile() == admin)
            .ok_or(Error::GroupNotFound(*group.id()))
    }

    pub fn is_admin(&self, user: &User, group: &Group) -> Result<bool> {
        self.admin(group).map(|a| a.mobile() == user.mobile())
    }

    /// Messages sent into `group`, in send order.
    pub fn messages(&self, group: &Group) -> Result<Vec<&Message>> {
        let ids = self
            .repo
            .find_messages(group.id())
            .ok_or(Error::GroupNotFound(*group.id()))?;

        Ok(ids
            .iter()
            .filter_map(|id| self.repo.find_message(id))
            .collect())
    }

    pub fn message_count(&self, group: &Group) -> Result<usize> {
        self.repo
            .find_messages(group.id())
            .map(<[message::Id]>::len)
            .ok_or(Error::GroupNotFound(*group.id()))
    }

    pub fn sender(&self, id: &message::Id) -> Option<&user::Mobile> {
        self.repo.find_sender(id)
    }

    pub fn summary(&self, group: &Group) -> Result<GroupSummary> {
        let stored = self
            .repo
            .find_group(group.id())
            .ok_or(Error::GroupNotFound(*group.id()))?;

        Ok(GroupSummary::new(
            stored,
            self.admin(group)?,
            self.members(group)?,
            self.message_count(group)?,
        ))
    }

    pub const fn custom_group_count(&self) -> usize {
        self.repo.custom_group_count()
    }

    pub const fn last_message_id(&self) -> &message::Id {
        self.repo.last_message_id()
    }
}

/// Read-only checks applied before any mutation.
pub(crate) struct Validator<'a> {
    repo: &'a DirectoryRepository,
}

impl<'a> Validator<'a> {
    pub const fn new(repo: &'a DirectoryRepository) -> Self {
        Self { repo }
    }
}

impl Validator<'_> {
    pub fn check_group(&self, id: &group::Id) -> Result<()> {
        if !self.repo.group_exists(id) {
            return Err(Error::GroupNotFound(*id));
        }

        Ok(())
    }

    pub fn check_member(&self, id: &group::Id, mobile: &user::Mobile) -> Result<()> {
        if !self.belongs_to_group(id, mobile) {
            return Err(Error::NotAMember(mobile.clone()));
        }

        Ok(())
    }

    pub fn check_participant(&self, id: &group::Id, mobile: &user::Mobile) -> Result<()> {
        if !self.belongs_to_group(id, mobile) {
            return Err(Error::NotAParticipant(mobile.clone()));
        }

        Ok(())
    }

    pub fn check_admin(&self, id: &group::Id, mobile: &user::Mobile) -> Result<()> {
        let is_admin = self.repo.find_admin(id).is_some_and(|a| a == mobile);

        if !is_admin || !self.belongs_to_group(id, mobile) {
            return Err(Error::NotAuthorized(mobile.clone()));
        }

        Ok(())
    }

    /// The message must be the one this directory handed out under its id.
    pub fn check_message(&self, message: &Message) -> Result<()> {
        if self.repo.find_message(message.id()) != Some(message) {
            return Err(Error::MessageNotFound(*message.id()));
        }

        Ok(())
    }

    pub fn check_unsent(&self, id: &message::Id) -> Result<()> {
        if self.repo.find_sender(id).is_some() {
            return Err(Error::AlreadySent(*id));
        }

        Ok(())
    }

    fn belongs_to_group(&self, id: &group::Id, mobile: &user::Mobile) -> bool {
        self.repo
            .find_members(id)
            .is_some_and(|members| members.iter().any(|m| m.mobile() == mobile))
    }
}
