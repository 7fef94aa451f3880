mod common;

use crate::common::SequentialIdGenerator;
use quick_chat_lib::libs::message::{
    MessageAction, MessageCounters, MessageIdGenerator, MessageRecord, RandomIdGenerator,
};
use quick_chat_lib::MessageStatus;

fn record(payload: &str, counters: &mut MessageCounters) -> MessageRecord {
    let mut id_gen = SequentialIdGenerator::new();
    MessageRecord::new(
        payload.to_string(),
        "+27831234567".to_string(),
        "+27821112222".to_string(),
        counters,
        &mut id_gen,
    )
}

#[test]
fn construction_assigns_id_sequence_and_pending_status() {
    let mut counters = MessageCounters::default();
    let message = record("Hi there", &mut counters);

    assert_eq!(message.id(), "0000000001");
    assert_eq!(message.status(), MessageStatus::Pending);
    assert_eq!(counters.created, 1);
    assert_eq!(counters.total_sent, 0);
}

#[test]
fn random_ids_are_ten_ascii_digits() {
    let mut id_gen = RandomIdGenerator;
    for _ in 0..100 {
        let id = id_gen.next_id();
        assert_eq!(id.len(), 10);
        assert!(id.bytes().all(|b| b.is_ascii_digit()), "Non-digit in {id}");
    }
}

#[test]
fn length_valid_up_to_250_characters() {
    let mut counters = MessageCounters::default();
    assert!(record(&"x".repeat(250), &mut counters).is_length_valid());
    assert!(!record(&"x".repeat(251), &mut counters).is_length_valid());
    assert!(record("", &mut counters).is_length_valid());
}

#[test]
fn recipient_format_follows_international_rule() {
    let mut counters = MessageCounters::default();
    let mut id_gen = SequentialIdGenerator::new();

    let valid = MessageRecord::new(
        "hello".to_string(),
        "+1234567890".to_string(),
        "+27821112222".to_string(),
        &mut counters,
        &mut id_gen,
    );
    assert!(valid.is_recipient_format_valid());

    let invalid = MessageRecord::new(
        "hello".to_string(),
        "0831234567".to_string(),
        "+27821112222".to_string(),
        &mut counters,
        &mut id_gen,
    );
    assert!(!invalid.is_recipient_format_valid());
}

#[test]
fn hash_combines_id_prefix_sequence_and_words() {
    let mut counters = MessageCounters::default();
    let message = record("hello brave new world", &mut counters);

    assert_eq!(message.hash(), "00:1:HELLOWORLD");
}

#[test]
fn hash_repeats_single_word_and_tolerates_empty_payload() {
    let mut counters = MessageCounters::default();
    let single = record("hello", &mut counters);
    assert_eq!(single.hash(), "00:1:HELLOHELLO");

    let empty = record("", &mut counters);
    assert_eq!(empty.hash(), "00:2:");
}

#[test]
fn hash_uses_the_construction_time_counter_snapshot() {
    let mut counters = MessageCounters::default();
    let first = record("one word", &mut counters);
    let second = record("two words", &mut counters);

    // Later constructions must not shift an earlier record's hash.
    assert_eq!(first.hash(), "00:1:ONEWORD");
    assert_eq!(second.hash(), "00:2:TWOWORDS");
    assert_eq!(first.hash(), first.hash(), "Hash must be idempotent");
}

#[test]
fn process_send_marks_sent_and_counts() {
    let mut counters = MessageCounters::default();
    let mut message = record("Hi", &mut counters);

    let outcome = message.process(MessageAction::Send, &mut counters);
    assert_eq!(outcome, "Message sent successfully");
    assert_eq!(message.status(), MessageStatus::Sent);
    assert_eq!(counters.total_sent, 1);
}

#[test]
fn process_disregard_leaves_status_untouched() {
    let mut counters = MessageCounters::default();
    let mut message = record("Hi", &mut counters);
    message.process(MessageAction::Send, &mut counters);

    let outcome = message.process(MessageAction::Disregard, &mut counters);
    assert_eq!(outcome, "Message disregarded");
    assert_eq!(message.status(), MessageStatus::Sent);
    assert_eq!(counters.total_sent, 1, "Disregard must not count as sent");
}

#[test]
fn process_store_parks_back_to_pending() {
    let mut counters = MessageCounters::default();
    let mut message = record("Hi", &mut counters);
    message.process(MessageAction::Send, &mut counters);

    let outcome = message.process(MessageAction::Store, &mut counters);
    assert_eq!(outcome, "Message stored for later");
    assert_eq!(message.status(), MessageStatus::Pending);
}

#[test]
fn to_json_keeps_the_wire_field_order() {
    let mut counters = MessageCounters::default();
    let mut message = record("hello world", &mut counters);
    message.process(MessageAction::Send, &mut counters);

    let json = message.to_json();
    let parsed: serde_json::Value =
        serde_json::from_str(&json).expect("record JSON should parse");

    assert_eq!(parsed["messageId"], "0000000001");
    assert_eq!(parsed["messageHash"], "00:1:HELLOWORLD");
    assert_eq!(parsed["recipient"], "+27831234567");
    assert_eq!(parsed["sender"], "+27821112222");
    assert_eq!(parsed["message"], "hello world");
    assert_eq!(parsed["status"], "Sent");
    assert!(parsed["timestamp"].is_string());

    // Field order is part of the format, not just the content.
    let expected_order = [
        "messageId",
        "messageHash",
        "recipient",
        "sender",
        "message",
        "timestamp",
        "status",
    ];
    let mut last = 0;
    for key in expected_order {
        let pos = json
            .find(&format!("\"{key}\":"))
            .unwrap_or_else(|| panic!("Missing key {key}"));
        assert!(pos > last || key == "messageId", "{key} out of order");
        last = pos;
    }
}

#[test]
fn details_lists_every_field() {
    let mut counters = MessageCounters::default();
    let message = record("hello", &mut counters);
    let details = message.details();

    assert!(details.contains("Message ID: 0000000001"));
    assert!(details.contains("Hash: 00:1:HELLOHELLO"));
    assert!(details.contains("From: +27821112222"));
    assert!(details.contains("To: +27831234567"));
    assert!(details.contains("Content: hello"));
    assert!(details.contains("Status: Pending"));
}
