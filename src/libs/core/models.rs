use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered user identity, keyed by phone number in the directory.
/// Passwords are held and compared in clear text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub logged_in: bool,
}

impl Account {
    pub fn new(
        username: String,
        password: String,
        first_name: String,
        last_name: String,
        phone_number: String,
    ) -> Self {
        Self {
            username,
            password,
            first_name,
            last_name,
            phone_number,
            logged_in: false,
        }
    }

    pub fn greeting(&self) -> String {
        format!(
            "Welcome {} {}, great to see you!",
            self.first_name, self.last_name
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    Pending,
    Sent,
    Received,
    Read,
    Failed,
}

impl MessageStatus {
    /// Display label used in serialized output and the UI.
    pub fn label(&self) -> &'static str {
        match self {
            MessageStatus::Pending => "Pending",
            MessageStatus::Sent => "Sent",
            MessageStatus::Received => "Received",
            MessageStatus::Read => "Read",
            MessageStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Models handed to the front-end for rendering

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            phone_number: account.phone_number.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageView {
    pub message_id: String,
    pub sender_name: String,
    pub content: String,
    pub timestamp: String,
    pub status: MessageStatus,
    pub outgoing: bool,
}
