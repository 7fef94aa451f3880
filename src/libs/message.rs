use chrono::{Local, NaiveDateTime};
use rand::Rng;

use crate::libs::core::models::MessageStatus;
use crate::libs::json::{encode_object, JsonValue};
use crate::libs::validation;

/// Source of fresh message identifiers: 10 ASCII digits, zero-padded.
/// Implementations are free to be random or deterministic; uniqueness is not
/// guaranteed either way.
pub trait MessageIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Draws ids uniformly from [0, 1_000_000_000). Collisions are possible and
/// accepted.
pub struct RandomIdGenerator;

impl MessageIdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        let id: u32 = rand::rng().random_range(0..1_000_000_000);
        format!("{:010}", id)
    }
}

/// Creation and sent counters, owned by the directory and threaded through
/// record construction and processing by reference. The creation count is
/// snapshotted into each record so its hash never moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageCounters {
    pub created: u32,
    pub total_sent: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAction {
    Send,
    Disregard,
    Store,
}

/// One chat message. Identity, payload, parties, timestamp and the counter
/// snapshot are fixed at construction; only `status` ever changes, and only
/// through [`MessageRecord::process`].
#[derive(Clone, Debug)]
pub struct MessageRecord {
    id: String,
    payload: String,
    sender_number: String,
    recipient_number: String,
    created_at: NaiveDateTime,
    sequence: u32,
    status: MessageStatus,
}

impl MessageRecord {
    pub fn new(
        payload: String,
        recipient_number: String,
        sender_number: String,
        counters: &mut MessageCounters,
        id_gen: &mut dyn MessageIdGenerator,
    ) -> Self {
        counters.created += 1;

        Self {
            id: id_gen.next_id(),
            payload,
            sender_number,
            recipient_number,
            created_at: Local::now().naive_local(),
            sequence: counters.created,
            status: MessageStatus::Pending,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn sender_number(&self) -> &str {
        &self.sender_number
    }

    pub fn recipient_number(&self) -> &str {
        &self.recipient_number
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn status(&self) -> MessageStatus {
        self.status
    }

    pub fn is_length_valid(&self) -> bool {
        self.payload.chars().count() <= 250
    }

    pub fn is_recipient_format_valid(&self) -> bool {
        validation::valid_recipient_number(&self.recipient_number)
    }

    /// Identity hash recomputed on demand: first two id digits, the creation
    /// counter as it stood when this record was built, then the first and
    /// last payload words uppercased. A single-word payload repeats that
    /// word; an empty payload leaves both slots empty.
    pub fn hash(&self) -> String {
        let mut words = self.payload.split_whitespace();
        let first = words.next().unwrap_or("");
        let last = words.next_back().unwrap_or(first);

        format!(
            "{}:{}:{}{}",
            &self.id[..2],
            self.sequence,
            first.to_uppercase(),
            last.to_uppercase()
        )
    }

    /// Applies a user action. `Send` marks the record sent and bumps the
    /// shared sent counter; `Disregard` changes nothing; `Store` parks the
    /// record back in `Pending`. Returns the outcome text for display.
    pub fn process(&mut self, action: MessageAction, counters: &mut MessageCounters) -> String {
        match action {
            MessageAction::Send => {
                self.status = MessageStatus::Sent;
                counters.total_sent += 1;
                "Message sent successfully".to_string()
            }
            MessageAction::Disregard => "Message disregarded".to_string(),
            MessageAction::Store => {
                self.status = MessageStatus::Pending;
                "Message stored for later".to_string()
            }
        }
    }

    /// Serializes to one JSON object with a fixed field order. This is the
    /// line format appended to the persistence sink.
    pub fn to_json(&self) -> String {
        encode_object([
            ("messageId", JsonValue::from(self.id.as_str())),
            ("messageHash", JsonValue::from(self.hash())),
            ("recipient", JsonValue::from(self.recipient_number.as_str())),
            ("sender", JsonValue::from(self.sender_number.as_str())),
            ("message", JsonValue::from(self.payload.as_str())),
            ("timestamp", JsonValue::from(self.timestamp_text())),
            ("status", JsonValue::from(self.status.label())),
        ])
    }

    /// Multi-line, human-readable dump of every field.
    pub fn details(&self) -> String {
        format!(
            "Message ID: {}\nHash: {}\nFrom: {}\nTo: {}\nContent: {}\nStatus: {}\nTime: {}",
            self.id,
            self.hash(),
            self.sender_number,
            self.recipient_number,
            self.payload,
            self.status,
            self.timestamp_text()
        )
    }

    /// ISO-8601-like rendering of the creation time, as it appears in the
    /// serialized record.
    pub fn timestamp_text(&self) -> String {
        self.created_at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }
}
