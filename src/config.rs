//! Configuration module for tptags
//!
//! Manages application configuration including named library roots.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TptagsConfig {
    /// Map of library names to their root directories
    #[serde(default)]
    pub libraries: HashMap<String, PathBuf>,

    /// The default library to use when none is specified
    #[serde(default)]
    pub default_library: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl TptagsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tptags").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a library root to the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_library(&mut self, name: String, root: PathBuf) -> Result<(), ConfigError> {
        self.libraries.insert(name, root);
        self.save()
    }

    /// Remove a library from the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_library(&mut self, name: &str) -> Result<Option<PathBuf>, ConfigError> {
        let removed = self.libraries.remove(name);
        self.save()?;
        Ok(removed)
    }

    /// Get a library root by name
    #[must_use]
    pub fn get_library(&self, name: &str) -> Option<&PathBuf> {
        self.libraries.get(name)
    }

    /// List all library names
    #[must_use]
    pub fn list_libraries(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.libraries.keys().collect();
        names.sort();
        names
    }

    /// Set the default library
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the library name doesn't exist in the configuration
    /// or if saving the configuration fails.
    pub fn set_default_library(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.libraries.contains_key(&name) {
            return Err(ConfigError::Message(
                format!("Library '{name}' does not exist in configuration")
            ));
        }
        self.default_library = Some(name);
        self.save()
    }

    /// Get the default library name
    #[must_use]
    pub const fn get_default_library(&self) -> Option<&String> {
        self.default_library.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TptagsConfig::default();
        assert!(config.libraries.is_empty());
        assert!(config.default_library.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_add_library() {
        let mut config = TptagsConfig::default();
        config.libraries.insert("photos".to_string(), PathBuf::from("/tmp/photos"));

        assert_eq!(config.libraries.len(), 1);
        assert_eq!(config.get_library("photos"), Some(&PathBuf::from("/tmp/photos")));
    }

    #[test]
    fn test_remove_library() {
        let mut config = TptagsConfig::default();
        let root = PathBuf::from("/tmp/videos");

        config.libraries.insert("videos".to_string(), root.clone());
        assert_eq!(config.libraries.len(), 1);

        let removed = config.libraries.remove("videos");
        assert_eq!(removed, Some(root));
        assert!(config.libraries.is_empty());
    }

    #[test]
    fn test_remove_nonexistent_library() {
        let mut config = TptagsConfig::default();
        assert_eq!(config.libraries.remove("nonexistent"), None);
    }

    #[test]
    fn test_list_libraries_is_sorted() {
        let mut config = TptagsConfig::default();

        config.libraries.insert("gamma".to_string(), PathBuf::from("/tmp/gamma"));
        config.libraries.insert("alpha".to_string(), PathBuf::from("/tmp/alpha"));
        config.libraries.insert("beta".to_string(), PathBuf::from("/tmp/beta"));

        let names = config.list_libraries();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_set_default_library() {
        let mut config = TptagsConfig::default();
        config.libraries.insert("photos".to_string(), PathBuf::from("/tmp/photos"));

        config.default_library = Some("photos".to_string());
        assert_eq!(config.get_default_library(), Some(&"photos".to_string()));
    }

    #[test]
    fn test_config_round_trip_through_toml() {
        let mut config = TptagsConfig::default();
        config.libraries.insert("photos".to_string(), PathBuf::from("/tmp/photos"));
        config.default_library = Some("photos".to_string());
        config.quiet = true;

        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: TptagsConfig = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.libraries, config.libraries);
        assert_eq!(parsed.default_library, config.default_library);
        assert!(parsed.quiet);
    }
}
