//! Disk-backed cache for conversation logs.
//!
//! One JSON document at `<data_dir>/messages.json` holds the full mapping
//! from conversation id to ordered message list. The file is rewritten after
//! every append (single-writer: one client process), and read once at
//! startup. A missing or unreadable file is treated as an empty mapping,
//! never as an error the user sees.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::Message;

/// Conversation id -> append-ordered message log.
pub type ConversationLogs = HashMap<u32, Vec<Message>>;

const CACHE_FILE: &str = "messages.json";

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct MessageCache {
    path: PathBuf,
}

impl MessageCache {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CACHE_FILE),
        }
    }

    /// Load the persisted logs. Any failure (missing file, corrupt JSON)
    /// yields an empty mapping.
    pub fn load(&self) -> ConversationLogs {
        let Ok(bytes) = std::fs::read(&self.path) else {
            return ConversationLogs::new();
        };
        match serde_json::from_slice(&bytes) {
            Ok(logs) => logs,
            Err(e) => {
                tracing::debug!("discarding unreadable message cache: {}", e);
                ConversationLogs::new()
            }
        }
    }

    /// Serialize the full mapping and write it atomically, via a temp file
    /// renamed over the target so a crash mid-write cannot corrupt the cache.
    pub fn save(&self, logs: &ConversationLogs) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec(logs)?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, &bytes)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender_id: u32, receiver_id: u32, text: &str) -> Message {
        Message {
            sender_id,
            receiver_id,
            message_text: text.to_string(),
            timestamp: "2024-05-01T14:05:00Z".to_string(),
            client_id: None,
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = MessageCache::new(dir.path());
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CACHE_FILE), b"{not json").unwrap();
        let cache = MessageCache::new(dir.path());
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = MessageCache::new(dir.path());

        let mut logs = ConversationLogs::new();
        logs.insert(1, vec![message(1, 2, "hi"), message(2, 1, "hello")]);
        logs.insert(7, vec![message(7, 1, "orphan")]);
        cache.save(&logs).unwrap();

        let loaded = cache.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[&1].len(), 2);
        assert_eq!(loaded[&1][0].message_text, "hi");
        assert_eq!(loaded[&1][1].message_text, "hello");
        assert_eq!(loaded[&7][0].message_text, "orphan");

        // save(load()) is stable: a second round trip reproduces the value
        cache.save(&loaded).unwrap();
        let reloaded = cache.load();
        assert_eq!(reloaded[&1].len(), 2);
        assert_eq!(reloaded[&7].len(), 1);
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper");
        let cache = MessageCache::new(&nested);
        cache.save(&ConversationLogs::new()).unwrap();
        assert!(nested.join(CACHE_FILE).exists());
    }
}
