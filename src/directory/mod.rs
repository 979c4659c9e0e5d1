use crate::{group, message, user};

pub mod repository;
pub mod service;

pub use service::Directory;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("user already exists: {0}")]
    DuplicateUser(user::Mobile),
    #[error("group does not exist: {0}")]
    GroupNotFound(group::Id),
    #[error("not allowed to send message, not a member: {0}")]
    NotAMember(user::Mobile),
    #[error("user is not a participant: {0}")]
    NotAParticipant(user::Mobile),
    #[error("approver does not have rights: {0}")]
    NotAuthorized(user::Mobile),
    #[error("message not found: {0}")]
    MessageNotFound(message::Id),
    #[error("message already sent: {0}")]
    AlreadySent(message::Id),
}
