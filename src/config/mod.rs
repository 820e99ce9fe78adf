//! Configuration loading
//!
//! Read-only: the file is written by the user, never by this crate.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{ProntoClient, DEFAULT_ACCOUNTS_BASE, DEFAULT_API_BASE};

const ENV_API_BASE: &str = "PRONTO_API_BASE_URL";
const ENV_ACCOUNTS_BASE: &str = "PRONTO_ACCOUNTS_BASE_URL";
const ENV_ACCESS_TOKEN: &str = "PRONTO_ACCESS_TOKEN";

/// Application configuration
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Organization API host, e.g. `https://stanfordohs.pronto.io/`
    pub api_base_url: Option<String>,
    /// Accounts host used by the email/code login steps
    pub accounts_base_url: Option<String>,
    /// Access token from a previous `token-login`
    pub access_token: Option<String>,
}

impl Config {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "pronto", "pronto-cli")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from a specific file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Overwrite fields with any non-empty value `lookup` returns.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get(ENV_API_BASE) {
            self.api_base_url = Some(v);
        }
        if let Some(v) = get(ENV_ACCOUNTS_BASE) {
            self.accounts_base_url = Some(v);
        }
        if let Some(v) = get(ENV_ACCESS_TOKEN) {
            self.access_token = Some(v);
        }
    }

    /// Build a client from this configuration, binding the token if present.
    pub fn client(&self) -> crate::error::Result<ProntoClient> {
        let client = ProntoClient::with_base_urls(
            self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE),
            self.accounts_base_url
                .as_deref()
                .unwrap_or(DEFAULT_ACCOUNTS_BASE),
        )?;
        Ok(match self.access_token {
            Some(ref token) => client.with_access_token(token.clone()),
            None => client,
        })
    }
}
