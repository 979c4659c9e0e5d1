pub mod config;
pub mod directory;
pub mod group;
pub mod message;
pub mod user;

pub use directory::{Directory, Error, Result};
