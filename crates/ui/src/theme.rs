use core::str::FromStr;

use serde::{Deserialize, Serialize};

use forgepos_core::DomainError;

/// Color scheme of the POS screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph offering the *other* mode: a moon while light, a sun while dark.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }

    /// Class set on the document root while this mode is active.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            ThemeMode::Light => None,
            ThemeMode::Dark => Some("dark"),
        }
    }
}

impl core::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(DomainError::validation(format!(
                "unsupported theme {other:?} (expected \"light\" or \"dark\")"
            ))),
        }
    }
}
