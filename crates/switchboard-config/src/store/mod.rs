//! Persisted inbox state.
//!
//! The whole [`InboxConfig`] is stored as one JSON blob under the fixed key
//! [`STATE_KEY`] (`<dir>/state.json`). Loading never fails: a missing or
//! unparseable blob yields the built-in default. Saving overwrites
//! atomically (write to `.tmp`, then rename).


use std::path::{Path, PathBuf};

use switchboard_common::ConfigError;
use tracing::{debug, info, warn};

use crate::paths;
use crate::schema::InboxConfig;
use crate::validation::{self, report};

/// Key the inbox state is stored under.
pub const STATE_KEY: &str = "state";

/// Key-value persistence of the inbox state.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// A store rooted at `dir`. Nothing is touched until the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store in the platform config directory.
    pub fn open_default() -> Result<Self, ConfigError> {
        Ok(Self::new(paths::config_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing [`STATE_KEY`].
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{STATE_KEY}.json"))
    }

    /// Read and parse the stored state.
    ///
    /// The stored value goes through the same validation as an edit, but a
    /// violation is only logged: the state was accepted when it was saved,
    /// and refusing it here would discard the user's inbox.
    pub fn try_load(&self) -> Result<InboxConfig, ConfigError> {
        let path = self.path();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.clone())
            } else {
                ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
            }
        })?;

        let config: InboxConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse state: {e}")))?;

        if let Err(errors) = validation::validate_config(&config) {
            warn!(
                violations = errors.len(),
                "stored state has validation problems, using it anyway:\n{}",
                report(&errors)
            );
        }

        Ok(config)
    }

    /// Load the stored state, or the built-in default if there is none or it
    /// cannot be parsed.
    pub fn load(&self) -> InboxConfig {
        match self.try_load() {
            Ok(config) => {
                info!(
                    path = %self.path().display(),
                    services = config.service_count(),
                    "loaded inbox state"
                );
                config
            }
            Err(ConfigError::FileNotFound(path)) => {
                info!(path = %path.display(), "no stored state, using built-in default");
                InboxConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "stored state unusable, using built-in default");
                InboxConfig::default()
            }
        }
    }

    /// Overwrite the stored state.
    pub fn save(&self, config: &InboxConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string(config)
            .map_err(|e| ConfigError::WriteError(format!("failed to serialize state: {e}")))?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create state directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path();
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            ConfigError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            // Rename can fail across some filesystems (and on Windows when the
            // target is open); fall back to a direct write.
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&path, &json).map_err(|e2| {
                ConfigError::WriteError(format!("failed to write {}: {e2}", path.display()))
            })?;
        }

        debug!(path = %path.display(), "inbox state saved");
        Ok(())
    }
}
