use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// File the memo collection is persisted to
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> String {
    "~/.local/share/memocal/memos.json".to_string()
}

/// Get the config file path (~/.config/memocal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("memocal");
    Ok(config_dir.join("config.toml"))
}

/// Load config from ~/.config/memocal/config.toml.
/// The file is optional; defaults apply when it is absent.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.data_file, "~/.local/share/memocal/memos.json");
    }

    #[test]
    fn data_file_is_overridable() {
        let config: Config = toml::from_str("data_file = \"/tmp/memos.json\"").unwrap();
        assert_eq!(config.data_file, "/tmp/memos.json");
    }

    #[test]
    fn expand_path_leaves_absolute_paths() {
        assert_eq!(expand_path("/tmp/x"), PathBuf::from("/tmp/x"));
    }
}
