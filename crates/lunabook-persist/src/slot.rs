//! The message slot: load/save of the full ordered message list.
//!
//! A slot holds exactly one serialized document: the complete message
//! sequence as a JSON array, newest first. Writes always replace the
//! whole document; there is no partial update.

use std::path::{Path, PathBuf};

use lunabook_types::Message;

use crate::error::PersistError;

/// A single named storage slot holding the full message sequence.
///
/// Implementations must preserve array order exactly: the store owns
/// the newest-first invariant and the slot only transports it.
pub trait MessageSlot {
    /// Read and deserialize the full message sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] if the backing storage cannot be
    /// read, or [`PersistError::Serialization`] if the content is not a
    /// well-formed message array.
    fn load(&self) -> Result<Vec<Message>, PersistError>;

    /// Serialize and write the full message sequence, replacing any
    /// previous content.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Serialization`] if serialization fails,
    /// or [`PersistError::Io`] if the write fails.
    fn save(&mut self, messages: &[Message]) -> Result<(), PersistError>;
}

/// A slot backed by one JSON file on disk.
///
/// The file-on-disk analog of a browser's single key-value storage
/// entry. A missing file surfaces as [`PersistError::Io`]; the store
/// treats that the same as any other load failure.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Create a slot at the given file path. The file is not touched
    /// until the first [`MessageSlot::load`] or [`MessageSlot::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSlot for JsonFileSlot {
    fn load(&self) -> Result<Vec<Message>, PersistError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&mut self, messages: &[Message]) -> Result<(), PersistError> {
        let json = serde_json::to_string(messages)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), count = messages.len(), "Wrote message slot");
        Ok(())
    }
}

/// An in-process slot holding the serialized document in memory.
///
/// Used by tests and ephemeral (non-durable) sessions. The `failing`
/// constructor produces a slot whose every operation errors, for
/// exercising the store's failure-absorption policy.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    document: Option<String>,
    fail: bool,
}

impl MemorySlot {
    /// Create an empty in-memory slot.
    pub const fn new() -> Self {
        Self {
            document: None,
            fail: false,
        }
    }

    /// Create a slot that fails every load and save.
    pub const fn failing() -> Self {
        Self {
            document: None,
            fail: true,
        }
    }

    /// Create a slot pre-filled with a raw JSON document.
    pub const fn with_document(document: String) -> Self {
        Self {
            document: Some(document),
            fail: false,
        }
    }

    /// The raw document currently held, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl MessageSlot for MemorySlot {
    fn load(&self) -> Result<Vec<Message>, PersistError> {
        if self.fail {
            return Err(PersistError::Io(std::io::Error::other(
                "memory slot configured to fail",
            )));
        }
        match &self.document {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    fn save(&mut self, messages: &[Message]) -> Result<(), PersistError> {
        if self.fail {
            return Err(PersistError::Io(std::io::Error::other(
                "memory slot configured to fail",
            )));
        }
        self.document = Some(serde_json::to_string(messages)?);
        Ok(())
    }
}
