use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Stored sign-in state, written as `session.toml` in the data directory.
///
/// This is the whole of the client's authentication state: one explicit
/// structure, loaded where needed and passed into [`crate::Backend`] — no
/// ambient globals. Deleting the file is logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
    pub obtained_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("session.toml")
    }

    /// Load the stored session, `Ok(None)` when nobody is signed in.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let session: AuthSession = toml::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Remove the stored session. Idempotent.
    pub fn delete_at(path: &Path) -> Result<bool> {
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
