use crate::error::WrapperError;
use crate::models::WrapperConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the configuration file, expected in the working directory.
pub const CONFIG_FILE_NAME: &str = "map2dif_wrapper.yaml";

/// Store for loading and saving the wrapper's YAML configuration file.
///
/// Manages a single file (`map2dif_wrapper.yaml`) next to the compiler
/// executables. The file is created with defaults on first run and read back
/// on every run; a malformed file is rejected whole, never partially accepted.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_path: Utf8PathBuf,
}

impl ConfigStore {
    /// Create a ConfigStore rooted at the given working directory.
    pub fn new<P: AsRef<Utf8Path>>(base_dir: P) -> Self {
        Self {
            config_path: base_dir.as_ref().join(CONFIG_FILE_NAME),
        }
    }

    /// Path of the managed configuration file.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }

    /// Write the default configuration if the file does not exist yet.
    ///
    /// # Errors
    /// [`WrapperError::ConfigWrite`] when the file cannot be created.
    pub fn ensure_exists(&self) -> Result<(), WrapperError> {
        if self.config_path.exists() {
            return Ok(());
        }

        tracing::debug!("Config file not found at {}", self.config_path);

        self.save(&WrapperConfig::default())
            .map_err(WrapperError::ConfigWrite)?;

        tracing::debug!("Config file created.");
        Ok(())
    }

    /// Load and parse the configuration file.
    ///
    /// # Errors
    /// [`WrapperError::ConfigParse`] on unreadable or malformed content; any
    /// parse failure discards the whole attempt.
    pub fn load(&self) -> Result<WrapperConfig, WrapperError> {
        let load = || -> Result<WrapperConfig> {
            let file_contents = fs::read_to_string(&self.config_path)
                .with_context(|| format!("Failed to read config: {}", self.config_path))?;

            let config: WrapperConfig = serde_yaml_ng::from_str(&file_contents)
                .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

            Ok(config)
        };

        let config = load().map_err(WrapperError::ConfigParse)?;
        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Serialize and write the configuration file.
    pub fn save(&self, config: &WrapperConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Check the invariants the compiler run depends on.
    ///
    /// # Errors
    /// [`WrapperError::MissingTexturesPath`] when `texturesPath` is absent or
    /// empty; [`WrapperError::TexturesPathNotFound`] when it does not name an
    /// existing directory.
    pub fn validate(&self, config: &WrapperConfig) -> Result<(), WrapperError> {
        let Some(textures_path) = config.textures_path() else {
            return Err(WrapperError::MissingTexturesPath);
        };

        if !Utf8Path::new(textures_path).is_dir() {
            return Err(WrapperError::TexturesPathNotFound(textures_path.to_string()));
        }

        Ok(())
    }
}
