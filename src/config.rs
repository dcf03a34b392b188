use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Artificial delay applied before showing results, purely for UX
/// pacing. Not a functional requirement; zero disables it.
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Local quotes resource, a JSON object of topic keys to quote arrays
    pub quotes_file: PathBuf,
    /// Optional remote quotes resource; takes precedence over the file
    #[serde(
        default,
        serialize_with = "crate::utils::format::serialize_option_string",
        deserialize_with = "crate::utils::format::deserialize_option_string"
    )]
    pub quotes_url: Option<String>,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    pub color: bool,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegen");

        Self {
            general: GeneralConfig {
                quotes_file: config_dir.join("quotes.json"),
                quotes_url: None,
                delay_ms: DEFAULT_DELAY_MS,
                color: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::System(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.quotes_file.as_os_str().is_empty() {
            return Err(AppError::System("Quotes file cannot be empty".to_string()));
        }

        if let Some(url) = &self.general.quotes_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(AppError::System(format!(
                "Quotes URL must be an http(s) URL, got: {}",
                url
            )));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quotegen")
            .join("config.toml")
    }
}
