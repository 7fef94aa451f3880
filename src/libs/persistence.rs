use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only text sink the directory hands each sent message to, one
/// serialized line per message. No locking, rotation or schema versioning.
pub trait MessageSink {
    fn append_line(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Appends lines to a local file, creating it on first use. The file is
/// opened per call; a failed write reports `SinkError` and nothing is
/// retried.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSink for FileSink {
    fn append_line(&mut self, line: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// In-memory sink backed by a shared line buffer. Cloning the sink clones
/// the handle, not the buffer, so a test can keep one handle and give the
/// directory the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("line buffer poisoned").clone()
    }

    pub fn drain(&self) -> Vec<String> {
        let mut lines = self.lines.lock().expect("line buffer poisoned");
        let drained = lines.clone();
        lines.clear();
        drained
    }
}

impl MessageSink for MemorySink {
    fn append_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines
            .lock()
            .expect("line buffer poisoned")
            .push(line.to_string());
        Ok(())
    }
}
