use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CropcastError, Result};

/// Top-level configuration for the CropCast assistant.
///
/// Loaded from a TOML file supplied by the embedding shell. Each section
/// corresponds to one concern; missing sections fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropcastConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for CropcastConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl CropcastConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CropcastConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CropcastError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Display name used in the welcome banner.
    pub user_name: String,
    /// Log level used when RUST_LOG is not set: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            user_name: "Farmer".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Conversation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay in milliseconds before the assistant reply is appended.
    pub reply_delay_ms: u64,
    /// Assistant greeting seeded into every new conversation.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            greeting: "Hello! I'm your CropCast AI Assistant. I can help you with farming \
                       advice, crop management, pest identification, and market insights. \
                       How can I assist you today?"
                .to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
