//! RecordStore - File-Backed Collection Persistence
//!
//! ## Responsibilities
//!
//! - Durable, whole-collection persistence for alerts and complaints
//! - One JSON document per entity kind under the store root
//! - Serialize load-mutate-save sequences per entity kind
//!
//! ## Design Principles
//!
//! - No other module touches the backing files
//! - Missing file is first use, not an error
//! - Unreadable content degrades to an empty collection (logged, not raised)

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

/// Entity kinds with independent collections and identifier spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Alerts,
    Complaints,
}

impl RecordKind {
    /// Backing file name under the store root
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::Alerts => "alerts.json",
            RecordKind::Complaints => "complaints.json",
        }
    }
}

/// File-backed record store
///
/// Each kind has its own mutex so alert and complaint operations are
/// independent critical sections. A kind's mutex is held across the
/// whole load-mutate-save sequence, not just the file write; two
/// concurrent inserts would otherwise both read the same base
/// collection and one insertion would be lost.
pub struct RecordStore {
    root: PathBuf,
    alerts_lock: Mutex<()>,
    complaints_lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            alerts_lock: Mutex::new(()),
            complaints_lock: Mutex::new(()),
        }
    }

    fn lock_for(&self, kind: RecordKind) -> &Mutex<()> {
        match kind {
            RecordKind::Alerts => &self.alerts_lock,
            RecordKind::Complaints => &self.complaints_lock,
        }
    }

    fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    /// Load the current collection for a kind
    pub async fn load<T>(&self, kind: RecordKind) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let _guard = self.lock_for(kind).lock().await;
        self.read_collection(kind).await
    }

    /// Replace the persisted collection for a kind
    pub async fn save<T>(&self, kind: RecordKind, records: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        let _guard = self.lock_for(kind).lock().await;
        self.write_collection(kind, records).await
    }

    /// Load a collection, apply a mutation, and persist the result,
    /// all under the kind's mutex
    pub async fn update<T, F>(&self, kind: RecordKind, mutate: F) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>),
    {
        let _guard = self.lock_for(kind).lock().await;
        let mut records = self.read_collection::<T>(kind).await?;
        mutate(&mut records);
        self.write_collection(kind, &records).await
    }

    async fn read_collection<T>(&self, kind: RecordKind) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let path = self.path_for(kind);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(
                    file = %path.display(),
                    error = %e,
                    "Corrupt record store file, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_collection<T>(&self, kind: RecordKind, records: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        fs::create_dir_all(&self.root).await?;
        let bytes = serde_json::to_vec_pretty(records)?;
        fs::write(self.path_for(kind), bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u64,
        text: String,
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn load_without_backing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        let notes: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        let notes = vec![note(1, "first"), note(2, "second")];

        store.save(RecordKind::Alerts, &notes).await.unwrap();
        let loaded: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();

        assert_eq!(loaded, notes);
    }

    #[tokio::test]
    async fn save_creates_missing_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("nested").join("data"));

        store
            .save(RecordKind::Alerts, &[note(1, "first")])
            .await
            .unwrap();
        let loaded: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();

        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        std::fs::write(dir.path().join("alerts.json"), b"{not json").unwrap();

        let notes: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn update_applies_mutation_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());

        store
            .update::<Note, _>(RecordKind::Alerts, |notes| notes.push(note(1, "first")))
            .await
            .unwrap();
        store
            .update::<Note, _>(RecordKind::Alerts, |notes| {
                notes.push(note(notes.len() as u64 + 1, "second"))
            })
            .await
            .unwrap();

        let loaded: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].id, 2);
    }

    #[tokio::test]
    async fn kinds_use_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());

        store
            .save(RecordKind::Alerts, &[note(1, "alert")])
            .await
            .unwrap();
        store
            .save(RecordKind::Complaints, &[note(1, "complaint"), note(2, "other")])
            .await
            .unwrap();

        let alerts: Vec<Note> = store.load(RecordKind::Alerts).await.unwrap();
        let complaints: Vec<Note> = store.load(RecordKind::Complaints).await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(complaints.len(), 2);
        assert!(dir.path().join("alerts.json").exists());
        assert!(dir.path().join("complaints.json").exists());
    }
}
