use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::libs::core::models::{Account, AccountView, MessageView};
use crate::libs::message::{
    MessageAction, MessageCounters, MessageIdGenerator, MessageRecord, RandomIdGenerator,
};
use crate::libs::persistence::MessageSink;
use crate::libs::validation;
use crate::ChatError;

/// In-memory store of accounts and per-account message lists, plus the
/// current session. All mutation happens on the calling thread; the sink is
/// invoked synchronously after in-memory state is already updated.
///
/// Invariants: every phone number in `accounts` has an entry in `inboxes`,
/// and `current_session` always names a registered phone number.
pub struct Directory {
    accounts: HashMap<String, Account>,
    inboxes: HashMap<String, Vec<MessageRecord>>,
    current_session: Option<String>,
    counters: MessageCounters,
    id_gen: Box<dyn MessageIdGenerator>,
    sink: Box<dyn MessageSink>,
}

impl Directory {
    pub fn new(sink: Box<dyn MessageSink>) -> Self {
        Self::with_id_generator(sink, Box::new(RandomIdGenerator))
    }

    pub fn with_id_generator(
        sink: Box<dyn MessageSink>,
        id_gen: Box<dyn MessageIdGenerator>,
    ) -> Self {
        Self {
            accounts: HashMap::new(),
            inboxes: HashMap::new(),
            current_session: None,
            counters: MessageCounters::default(),
            id_gen,
            sink,
        }
    }

    /// Validates the candidate and inserts the account together with its
    /// empty inbox. A failed check or a duplicate phone number leaves the
    /// directory untouched.
    pub fn register(
        &mut self,
        username: String,
        password: String,
        first_name: String,
        last_name: String,
        phone_number: String,
    ) -> Result<(), ChatError> {
        let account = Account::new(username, password, first_name, last_name, phone_number);
        validation::check_registration(&account)?;

        if self.accounts.contains_key(&account.phone_number) {
            return Err(ChatError::DuplicateAccount(account.phone_number));
        }

        info!(phone = %account.phone_number, "account registered");
        self.inboxes.insert(account.phone_number.clone(), Vec::new());
        self.accounts
            .insert(account.phone_number.clone(), account);
        Ok(())
    }

    /// Linear scan over accounts for a clear-text credential match. Success
    /// opens a session and returns the greeting; any failure reports the
    /// same error without revealing which field was wrong.
    pub fn login(&mut self, username: &str, password: &str) -> Result<String, ChatError> {
        for account in self.accounts.values_mut() {
            if account.username == username && account.password == password {
                account.logged_in = true;
                self.current_session = Some(account.phone_number.clone());
                info!(phone = %account.phone_number, "session opened");
                return Ok(account.greeting());
            }
        }

        Err(ChatError::InvalidCredentials)
    }

    pub fn logout(&mut self) {
        if let Some(phone) = self.current_session.take() {
            if let Some(account) = self.accounts.get_mut(&phone) {
                account.logged_in = false;
            }
        }
    }

    /// Builds a message from the current session to `recipient_number`,
    /// validates it (length, then recipient format, then registered
    /// recipient), records it in both parties' inboxes and appends one
    /// serialized line to the sink.
    ///
    /// A sink failure is reported to the caller, but the in-memory state it
    /// follows is not rolled back: the message stays in both inboxes with
    /// status `Sent`.
    pub fn send(&mut self, recipient_number: &str, payload: &str) -> Result<String, ChatError> {
        let sender = self
            .current_session
            .clone()
            .ok_or(ChatError::NotLoggedIn)?;

        let mut record = MessageRecord::new(
            payload.to_string(),
            recipient_number.to_string(),
            sender.clone(),
            &mut self.counters,
            self.id_gen.as_mut(),
        );

        if !record.is_length_valid() {
            return Err(ChatError::MessageTooLong);
        }

        if !record.is_recipient_format_valid() {
            return Err(ChatError::InvalidRecipientNumber);
        }

        if !self.accounts.contains_key(recipient_number) {
            return Err(ChatError::RecipientNotRegistered);
        }

        let outcome = record.process(MessageAction::Send, &mut self.counters);
        let line = record.to_json();

        self.inboxes
            .entry(sender)
            .or_default()
            .push(record.clone());
        self.inboxes
            .entry(recipient_number.to_string())
            .or_default()
            .push(record);

        if let Err(err) = self.sink.append_line(&line) {
            warn!(error = %err, "message persisted in memory only");
            return Err(err.into());
        }

        debug!(recipient = recipient_number, "message persisted");
        Ok(outcome)
    }

    /// Message list of the current session, in insertion order. Empty when
    /// nobody is logged in.
    pub fn recent_messages(&self) -> &[MessageRecord] {
        self.current_session
            .as_ref()
            .and_then(|phone| self.inboxes.get(phone))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Presentation projection of [`Directory::recent_messages`]: sender
    /// usernames resolved and each entry flagged as outgoing or not.
    pub fn recent_message_views(&self) -> Vec<MessageView> {
        let session = match &self.current_session {
            Some(phone) => phone,
            None => return Vec::new(),
        };

        self.recent_messages()
            .iter()
            .map(|record| MessageView {
                message_id: record.id().to_string(),
                sender_name: self
                    .accounts
                    .get(record.sender_number())
                    .map(|account| account.username.clone())
                    .unwrap_or_else(|| record.sender_number().to_string()),
                content: record.payload().to_string(),
                timestamp: record.timestamp_text(),
                status: record.status(),
                outgoing: record.sender_number() == session,
            })
            .collect()
    }

    /// Every registered account except the current session's, for recipient
    /// pickers.
    pub fn other_accounts(&self) -> Vec<AccountView> {
        self.accounts
            .values()
            .filter(|account| Some(&account.phone_number) != self.current_session.as_ref())
            .map(AccountView::from)
            .collect()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.current_session
            .as_ref()
            .and_then(|phone| self.accounts.get(phone))
    }

    pub fn is_registered(&self, phone_number: &str) -> bool {
        self.accounts.contains_key(phone_number)
    }

    pub fn total_sent(&self) -> u32 {
        self.counters.total_sent
    }

    pub fn counters(&self) -> MessageCounters {
        self.counters
    }
}
