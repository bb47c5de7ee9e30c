use crate::harvest::Snapshot;
use std::{
    io,
    path::{
        Path,
        PathBuf,
    },
};
use tokio::{
    fs,
    io::AsyncWriteExt as _,
};

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write snapshot to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read snapshot from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode snapshot at {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The single snapshot document, replaced wholesale on every save.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Save the snapshot using an atomic write.
    ///
    /// The document is written to `{path}.tmp` and renamed over `{path}`, so
    /// readers see either the previous snapshot or the new one, never a
    /// truncated file.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(snapshot).map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|source| PersistenceError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.temp_path();
        if let Err(source) = self.write_and_rename(&temp_path, &json).await {
            if let Err(e) = fs::remove_file(&temp_path).await {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %temp_path.display(), error = %e, "Failed to remove temporary snapshot");
                }
            }
            return Err(PersistenceError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), bytes = json.len(), "Saved snapshot");
        Ok(())
    }

    async fn write_and_rename(&self, temp_path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(content).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(temp_path, &self.path).await
    }

    /// Reads the snapshot back; `Ok(None)` means nothing was ever harvested.
    pub async fn load(&self) -> Result<Option<Snapshot>, PersistenceError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| PersistenceError::Decode {
                    path: self.path.clone(),
                    source,
                }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
