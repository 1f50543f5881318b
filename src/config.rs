//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution. All filesystem
//! inputs of the dashboard (the ownership workbook, the PDF map tree) are
//! injected here rather than hard-coded at the call sites.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Path to the ownership analysis workbook (first sheet, header row).
    pub spreadsheet: PathBuf,
    /// Base directory containing one subdirectory of PDF map exports per category.
    pub pdf_root: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            spreadsheet: PathBuf::from("data/analyza_vlastnictvo.xlsx"),
            pdf_root: PathBuf::from("data/pdf"),
        }
    }
}

/// Branding and page-content preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Organization name shown in the page header.
    pub organization: String,
    /// Subtitle shown under the organization name.
    pub subtitle: String,
    /// One-time tip shown on the first visit of a browser session.
    /// `None` disables the tip entirely.
    #[serde(default)]
    pub sidebar_tip: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            organization: "Chránená krajinná oblasť Kysuce".to_string(),
            subtitle: "Program starostlivosti".to_string(),
            sidebar_tip: Some(
                "V záložke „Mapy na stiahnutie“ nájdete PDF exporty máp.".to_string(),
            ),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ChkoDashboard/config.toml`
/// - macOS: `~/Library/Application Support/ChkoDashboard/config.toml`
/// - Windows: `%APPDATA%\ChkoDashboard\config.toml`
///
/// # Validation
///
/// - `spreadsheet`, when the file exists, must be a regular file
/// - `pdf_root`, when present on disk, must be a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Page branding and content
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ChkoDashboard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the caller
    /// asked for this exact file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// A spreadsheet or PDF root that is absent from disk is not an error at
    /// config time; the affected panel reports it when it renders. A path
    /// that exists but has the wrong kind (directory where a file is
    /// expected, or the reverse) is a configuration mistake and is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.paths.spreadsheet.exists() && !self.paths.spreadsheet.is_file() {
            anyhow::bail!(
                "Spreadsheet path is not a regular file: {}",
                self.paths.spreadsheet.display()
            );
        }

        if self.paths.pdf_root.exists() && !self.paths.pdf_root.is_dir() {
            anyhow::bail!(
                "PDF root path is not a directory: {}",
                self.paths.pdf_root.display()
            );
        }

        Ok(())
    }

    /// Re-roots the default relative paths under the given data directory.
    ///
    /// Used by the `--data-dir` CLI flag so a checkout can be served from
    /// anywhere without editing config.toml.
    pub fn with_data_dir(mut self, data_dir: &std::path::Path) -> Self {
        if self.paths.spreadsheet.is_relative() {
            self.paths.spreadsheet = data_dir.join(&self.paths.spreadsheet);
        }
        if self.paths.pdf_root.is_relative() {
            self.paths.pdf_root = data_dir.join(&self.paths.pdf_root);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(
            config.paths.spreadsheet,
            PathBuf::from("data/analyza_vlastnictvo.xlsx")
        );
        assert_eq!(config.paths.pdf_root, PathBuf::from("data/pdf"));
        assert!(config.ui.sidebar_tip.is_some());
    }

    #[test]
    fn test_config_validate_defaults() {
        let config = Config::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_spreadsheet_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let bogus = temp_dir.path().join("workbook.xlsx");
        fs::create_dir(&bogus).unwrap();

        let mut config = Config::new();
        config.paths.spreadsheet = bogus;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_pdf_root_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let bogus = temp_dir.path().join("pdf");
        fs::write(&bogus, "not a directory").unwrap();

        let mut config = Config::new();
        config.paths.pdf_root = bogus;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.organization = "Testovacia oblasť".to_string();
        config.ui.sidebar_tip = None;

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_config_with_data_dir() {
        let config = Config::new().with_data_dir(std::path::Path::new("/srv/chko"));
        assert_eq!(
            config.paths.spreadsheet,
            PathBuf::from("/srv/chko/data/analyza_vlastnictvo.xlsx")
        );
        assert_eq!(config.paths.pdf_root, PathBuf::from("/srv/chko/data/pdf"));
    }

    #[test]
    fn test_config_with_data_dir_keeps_absolute_paths() {
        let mut config = Config::new();
        config.paths.spreadsheet = PathBuf::from("/fixed/workbook.xlsx");
        let config = config.with_data_dir(std::path::Path::new("/srv/chko"));
        assert_eq!(config.paths.spreadsheet, PathBuf::from("/fixed/workbook.xlsx"));
    }
}
