use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRAILHOUND_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.trailhound (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TRAILHOUND_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("trailhound"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".trailhound"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Backend connection settings, stored as `config.toml` in the data
/// directory by `trailhound init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the hosted record service.
    pub backend_url: String,
    /// Public (anon) API key sent with every request.
    pub api_key: String,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "No config at {}; run `trailhound init` first",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            backend_url: "https://records.example.net".to_string(),
            api_key: "anon-key".to_string(),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.backend_url, "https://records.example.net");
        assert_eq!(loaded.api_key, "anon-key");

        Ok(())
    }

    #[test]
    fn test_load_missing_config_names_init() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("config.toml");

        let err = Config::load_from(&missing).unwrap_err();
        assert!(err.to_string().contains("trailhound init"));
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let dir = resolve_data_dir(Some("/tmp/trailhound-test"))?;
        assert_eq!(dir, PathBuf::from("/tmp/trailhound-test"));
        Ok(())
    }
}
