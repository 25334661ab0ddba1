use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;
use crate::storage::{default_data_dir, ensure_dir, write_atomic};

/// Number of trend-series day buckets the analytics chart shows.
pub const DEFAULT_TREND_DAYS: usize = 10;

/// User-facing application settings persisted alongside the ledger data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub currency: String,
    pub user_name: String,
    pub theme: Theme,
    #[serde(default)]
    pub privacy_mode: bool,
    #[serde(default)]
    pub budget_limit: f64,
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "JOD".into(),
            user_name: "User".into(),
            theme: Theme::Dark,
            privacy_mode: false,
            budget_limit: 2000.0,
            trend_days: DEFAULT_TREND_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

fn default_trend_days() -> usize {
    DEFAULT_TREND_DAYS
}

/// Loads and saves the settings file under the application data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(default_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join("settings.json"),
        })
    }

    /// Missing or unreadable settings fall back to defaults rather than
    /// blocking startup.
    pub fn load(&self) -> Result<Settings, LedgerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Settings::default())
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
