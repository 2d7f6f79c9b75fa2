use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::codec::{Codec, YamlCodec};
use super::profile::ConfigSet;
use super::storage::{Storage, StorageWriter};

/// Loads and persists the whole [`ConfigSet`] at one path. Every save
/// rewrites the file in full.
#[derive(Debug, Clone)]
pub struct ConfigRepository<S, C = YamlCodec> {
    storage: S,
    codec: C,
    path: PathBuf,
}

impl<S: Storage, C: Codec> ConfigRepository<S, C> {
    pub fn new(storage: S, codec: C, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            codec,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AppResult<ConfigSet> {
        self.try_load()?.ok_or_else(|| {
            AppError::NotFound(format!(
                "config file {:?} does not exist, create a new config with `config create reticule`",
                self.path.display().to_string()
            ))
        })
    }

    /// Like [`load`](Self::load), but a missing file is `Ok(None)`.
    pub fn try_load(&self) -> AppResult<Option<ConfigSet>> {
        let mut reader = match self.storage.open(&self.path) {
            Ok(reader) => reader,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let config_set = self.codec.decode(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            profiles = config_set.len(),
            "loaded config"
        );
        Ok(Some(config_set))
    }

    /// Rewrites an existing config file.
    pub fn save(&self, config_set: &ConfigSet) -> AppResult<()> {
        let bytes = self.codec.encode(config_set)?;
        let file = self.storage.open_truncate(&self.path)?;
        self.write_and_close(file, &bytes)
    }

    /// Creates the config file and its directory, then writes `config_set` into it.
    pub fn create(&self, config_set: &ConfigSet) -> AppResult<()> {
        let bytes = self.codec.encode(config_set)?;
        if let Some(parent) = self.path.parent() {
            self.storage.create_dir_all(parent)?;
        }
        let file = self.storage.create(&self.path)?;
        tracing::info!(path = %self.path.display(), "created config file");
        self.write_and_close(file, &bytes)
    }

    fn write_and_close(&self, mut file: S::Writer, bytes: &[u8]) -> AppResult<()> {
        // The handle is closed even when the write failed; the write error wins.
        let written = file.write_all(bytes);
        let closed = file.close();
        written.and(closed)?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "saved config");
        Ok(())
    }
}
