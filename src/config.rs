//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Backend used when neither the environment nor the config file names one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Domain suggested in the authentication test form
pub const DEFAULT_DOMAIN: &str = "example.com";

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Base URL of the registration backend
    pub api_base_url: Option<String>,
    /// Default domain for authentication tests
    pub default_domain: Option<String>,
    /// Call the real admin endpoints instead of simulating them
    pub admin_live: Option<bool>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "example", "aduser-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Backend base URL, with the environment override winning over the file
    pub fn resolved_api_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Domain pre-filled into the authentication test form
    pub fn resolved_default_domain(&self) -> String {
        self.default_domain
            .clone()
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string())
    }

    /// Whether admin actions call the backend instead of simulating
    pub fn admin_live(&self) -> bool {
        self.admin_live.unwrap_or(false)
    }
}
