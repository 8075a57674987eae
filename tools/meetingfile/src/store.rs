//! Persistent storage of one serialized record per file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

/// Error returned by [`RecordFile`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A UTF-8 text file holding exactly one serialized record.
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
    seed: String,
}

impl RecordFile {
    /// `seed` is written when the file does not exist yet.
    pub fn new(path: impl Into<PathBuf>, seed: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            seed: seed.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the full file content, creating the file (and missing parent
    /// directories) with the seed payload first if it is absent.
    pub fn read_or_seed(&self) -> Result<String, StoreError> {
        if !self.path.exists() {
            self.create_parent_dir()?;
            self.write(&self.seed)?;
            info!(path = %self.path.display(), "created file with default payload");
        }
        fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file content with `text`.
    ///
    /// The text goes to a sibling temporary file first and is renamed over
    /// the target, so a failed write leaves the previous content in place.
    pub fn write(&self, text: &str) -> Result<(), StoreError> {
        let tmp_path = self.tmp_path();
        let result = fs::write(&tmp_path, text).and_then(|()| fs::rename(&tmp_path, &self.path));
        result.map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn create_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|source| StoreError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
