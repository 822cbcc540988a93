use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Folder opened at startup when set.
    pub source_folder: Option<PathBuf>,
    /// Where deleted files are parked until undo. A relative path is
    /// resolved against the working directory.
    #[serde(default = "default_recycle_dir")]
    pub recycle_dir: PathBuf,
}

fn default_recycle_dir() -> PathBuf {
    PathBuf::from(".recycle_bin")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_folder: None,
            recycle_dir: default_recycle_dir(),
        }
    }
}

impl Settings {
    /// Loads settings from the user config directory, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but is not valid TOML.
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = tokio::fs::read_to_string(&config_path).await?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the settings back as TOML, creating the config directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        info!("Settings saved to {:?}", config_path);
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        Ok(config_dir.join("mediashelf").join("config.toml"))
    }
}
