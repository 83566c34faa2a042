//! UI configuration: built-in defaults, overridable from the environment.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use forgepos_i18n::Language;

use crate::{ThemeMode, UiError, UiResult};

pub const ENV_LANGUAGE: &str = "FORGEPOS_LANGUAGE";
pub const ENV_THEME: &str = "FORGEPOS_THEME";
pub const ENV_CLOCK_PERIOD_MS: &str = "FORGEPOS_CLOCK_PERIOD_MS";
pub const ENV_CATALOG_PATH: &str = "FORGEPOS_CATALOG_PATH";

/// Longest clock period that still refreshes the header at least once a second.
pub const MAX_CLOCK_PERIOD_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Language the providers start in.
    pub language: Language,
    /// Theme the providers start in.
    pub theme: ThemeMode,
    /// Header clock refresh period.
    pub clock_period_ms: u64,
    /// Optional JSON catalog merged over the built-in strings.
    pub catalog_path: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            theme: ThemeMode::Light,
            clock_period_ms: 1_000,
            catalog_path: None,
        }
    }
}

impl UiConfig {
    /// Defaults overridden by `FORGEPOS_*` environment variables.
    pub fn from_env() -> UiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> UiResult<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_LANGUAGE) {
            config.language = value.parse()?;
        }
        if let Some(value) = lookup(ENV_THEME) {
            config.theme = value.parse()?;
        }
        if let Some(value) = lookup(ENV_CLOCK_PERIOD_MS) {
            config.clock_period_ms = value.trim().parse().map_err(|e| {
                UiError::config(format!("{ENV_CLOCK_PERIOD_MS}={value:?}: {e}"))
            })?;
        }
        if let Some(value) = lookup(ENV_CATALOG_PATH) {
            if !value.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(value));
            }
        }

        config.validate()?;
        tracing::debug!(
            language = %config.language,
            theme = %config.theme,
            clock_period_ms = config.clock_period_ms,
            "ui configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> UiResult<()> {
        if self.clock_period_ms == 0 {
            return Err(UiError::config("clock period must be greater than zero"));
        }
        if self.clock_period_ms > MAX_CLOCK_PERIOD_MS {
            return Err(UiError::config(format!(
                "clock period must be at most {MAX_CLOCK_PERIOD_MS} ms, got {}",
                self.clock_period_ms
            )));
        }
        Ok(())
    }

    pub fn clock_period(&self) -> Duration {
        Duration::from_millis(self.clock_period_ms)
    }
}
