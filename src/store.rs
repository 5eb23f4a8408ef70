use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::{NewSubmission, Submission};

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
    Encode(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O error: {err}"),
            StoreError::Corrupt(err) => write!(f, "corrupt submissions file: {err}"),
            StoreError::Encode(err) => write!(f, "failed to encode submissions: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Ordered submission collection persisted as a single JSON array file.
///
/// Every operation reads the whole file. `append` holds `write_lock` across
/// its load/save pair so concurrent submissions never drop each other's
/// records or reuse an id. Saves go through a temp file and a rename, so
/// `list` can read without the lock.
pub struct SubmissionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records. A missing file is an empty collection.
    pub async fn load(&self) -> Result<Vec<Submission>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)
    }

    /// Replace the file contents with `records`, pretty-printed.
    pub async fn save(&self, records: &[Submission]) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(records).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        let written = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(&content).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            // The target is untouched; don't leave the partial copy behind
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }

    /// Assign the next id and a timestamp to `new`, then persist it.
    pub async fn append(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let id = records.len() as u64 + 1;
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();

        let submission = new.into_submission(id, timestamp);
        records.push(submission.clone());
        self.save(&records).await?;

        tracing::info!(id = submission.id, total = records.len(), "Submission stored");
        Ok(submission)
    }

    pub async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        self.load().await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
