use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from ~/.config/audiopub/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Configuration for bundle scanning and classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extra file extensions to treat as ignorable companions,
    /// merged with the built-in set (e.g. ["nfo", "cue"])
    #[serde(default)]
    pub ignore_extensions: Vec<String>,

    /// Whether to follow symlinks while walking the bundle directory
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,
}

fn default_follow_links() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_extensions: Vec::new(),
            follow_links: default_follow_links(),
        }
    }
}

impl Config {
    /// Load configuration from the default path (~/.config/audiopub/config.toml)
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("audiopub").join("config.toml"))
    }

    /// Scan settings with CLI-provided extensions merged in
    pub fn scan_with(&self, cli_ignore: &[String]) -> ScanConfig {
        let mut scan = self.scan.clone();
        scan.ignore_extensions.extend(cli_ignore.iter().cloned());
        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.scan.ignore_extensions.is_empty());
        assert!(config.scan.follow_links);
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[scan]
ignore_extensions = ["nfo", "cue"]
follow_links = false
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scan.ignore_extensions, vec!["nfo", "cue"]);
        assert!(!config.scan.follow_links);
    }

    #[test]
    fn test_scan_with_merges_cli_extensions() {
        let config = Config {
            scan: ScanConfig {
                ignore_extensions: vec!["nfo".to_string()],
                follow_links: true,
            },
        };

        let scan = config.scan_with(&["cue".to_string()]);
        assert_eq!(scan.ignore_extensions, vec!["nfo", "cue"]);
    }
}
