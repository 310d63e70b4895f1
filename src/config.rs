use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::faq::FaqTable;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub faq: FaqConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Label printed in front of every reply
    #[serde(default = "default_name")]
    pub name: String,
    /// Id of the single console user
    #[serde(default = "default_user_id")]
    pub user_id: u64,
    #[serde(default = "default_support_phone")]
    pub support_phone: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FaqConfig {
    /// Optional TOML file replacing the built-in FAQ table
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            user_id: default_user_id(),
            support_phone: default_support_phone(),
        }
    }
}

fn default_name() -> String {
    "EduGPT".to_string()
}

fn default_user_id() -> u64 {
    1
}

fn default_support_phone() -> String {
    "+7 (727) 377-33-33".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Like [`Config::load`], but a missing file means built-in defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// The FAQ table to serve: the configured file, or the built-in one
    pub fn faq_table(&self) -> Result<FaqTable> {
        match &self.faq.path {
            Some(path) => FaqTable::load(path),
            None => Ok(FaqTable::builtin()),
        }
    }
}
