//! Journal entry store: the whole history as one serialized blob.
//!
//! Contract: read once at startup, rewritten in full on every addition. No queries
//! beyond "the whole list" and "append one entry". Writes go to a temp file in
//! the same directory and are then renamed over the blob, so a crash never leaves a
//! half-written file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::entry::JournalEntry;

/// Fixed blob name, shared with the browser client's storage key.
pub const STORE_FILE_NAME: &str = "moodJournalEntries.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt journal blob: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Background write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait JournalStore: Send + Sync {
    /// The whole entry list, oldest first.
    async fn load_all(&self) -> Result<Vec<JournalEntry>, StoreError>;

    /// Appends one entry by rewriting the full snapshot. Returns the new list length.
    async fn append(&self, entry: JournalEntry) -> Result<usize, StoreError>;
}

/// File-backed store with an in-memory copy of the list.
pub struct FileJournalStore {
    path: PathBuf,
    entries: Mutex<Vec<JournalEntry>>,
}

impl FileJournalStore {
    /// Opens (or lazily creates) the blob under `data_dir` and reads it once.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(STORE_FILE_NAME);

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Journal store opened at {} ({} entries)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &[JournalEntry]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(entries)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<(), StoreError> {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}

#[async_trait]
impl JournalStore for FileJournalStore {
    async fn load_all(&self) -> Result<Vec<JournalEntry>, StoreError> {
        Ok(self.entries.lock().await.clone())
    }

    async fn append(&self, entry: JournalEntry) -> Result<usize, StoreError> {
        let mut guard = self.entries.lock().await;
        let mut next = guard.clone();
        next.push(entry);
        self.persist(&next).await?;
        *guard = next;
        Ok(guard.len())
    }
}
