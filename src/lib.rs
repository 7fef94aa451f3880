pub mod libs;

use thiserror::Error;

use crate::libs::persistence::SinkError;
use crate::libs::validation::CredentialError;

pub use crate::libs::core::models::{Account, AccountView, MessageStatus, MessageView};
pub use crate::libs::directory::Directory;
pub use crate::libs::message::{MessageAction, MessageCounters, MessageRecord};
pub use crate::libs::persistence::{FileSink, MemorySink, MessageSink};

/// Every failure a directory operation can report. Validation and lookup
/// failures are plain result values so a front end can display them;
/// `Persistence` is returned after the in-memory state change has already
/// been applied and is not rolled back.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error("Phone number {0} is already registered")]
    DuplicateAccount(String),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Message exceeds 250 character limit")]
    MessageTooLong,
    #[error("Invalid recipient number format")]
    InvalidRecipientNumber,
    #[error("Recipient not registered")]
    RecipientNotRegistered,
    #[error("No user is currently logged in")]
    NotLoggedIn,
    #[error("Failed to save message: {0}")]
    Persistence(#[from] SinkError),
}
