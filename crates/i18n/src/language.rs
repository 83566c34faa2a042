use core::str::FromStr;

use serde::{Deserialize, Serialize};

use forgepos_core::DomainError;

/// Display language of the POS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::En => TextDirection::Ltr,
            Language::Ar => TextDirection::Rtl,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// The other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl core::fmt::Display for Language {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(DomainError::validation(format!(
                "unsupported language code {other:?} (expected \"en\" or \"ar\")"
            ))),
        }
    }
}
