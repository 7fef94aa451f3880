use quick_chat_lib::libs::message::MessageIdGenerator;
use quick_chat_lib::libs::persistence::MemorySink;
use quick_chat_lib::Directory;

/// Deterministic stand-in for the random id source: "0000000001",
/// "0000000002", ... so hashes and serialized output are predictable.
pub struct SequentialIdGenerator {
    next: u32,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl MessageIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{:010}", self.next);
        self.next += 1;
        id
    }
}

/// Directory wired to a shared in-memory sink so tests can observe every
/// persisted line.
pub fn directory_with_sink() -> (Directory, MemorySink) {
    let sink = MemorySink::new();
    let directory = Directory::with_id_generator(
        Box::new(sink.clone()),
        Box::new(SequentialIdGenerator::new()),
    );
    (directory, sink)
}

pub fn register_alice(directory: &mut Directory) {
    directory
        .register(
            "ali_a".to_string(),
            "Pass123!".to_string(),
            "Alice".to_string(),
            "Smith".to_string(),
            "+27821112222".to_string(),
        )
        .expect("Alice should register");
}

pub fn register_bob(directory: &mut Directory) {
    directory
        .register(
            "bob_1".to_string(),
            "Secur3#Pass".to_string(),
            "Bob".to_string(),
            "Jones".to_string(),
            "+27831234567".to_string(),
        )
        .expect("Bob should register");
}
