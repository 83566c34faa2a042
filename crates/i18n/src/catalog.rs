//! Translation tables.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::Language;

const EN: &[(&str, &str)] = &[
    ("header.title", "Point of Sale"),
    ("header.cashier", "Cashier"),
    ("header.menu", "Open menu"),
    ("cart.add", "Add to cart"),
    ("cart.low.stock", "Low stock"),
    ("cart.stock", "Stock"),
    ("theme.to_dark", "Switch to dark mode"),
    ("theme.to_light", "Switch to light mode"),
    ("language.switch", "Change language"),
];

const AR: &[(&str, &str)] = &[
    ("header.title", "نقطة البيع"),
    ("header.cashier", "أمين الصندوق"),
    ("header.menu", "فتح القائمة"),
    ("cart.add", "أضف إلى السلة"),
    ("cart.low.stock", "مخزون منخفض"),
    ("cart.stock", "المخزون"),
    ("theme.to_dark", "التبديل إلى الوضع الداكن"),
    ("theme.to_light", "التبديل إلى الوضع الفاتح"),
    ("language.switch", "تغيير اللغة"),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog contains unsupported language {0:?}")]
    UnknownLanguage(String),
}

/// Key → string tables for every supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Catalog with no entries; every lookup falls back to the key.
    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// The strings shipped with the POS.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (language, table) in [(Language::En, EN), (Language::Ar, AR)] {
            for (key, value) in table {
                catalog.insert(language, *key, *value);
            }
        }
        catalog
    }

    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.tables
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Parse `{"en": {"key": "text"}, "ar": {...}}`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut catalog = Self::empty();
        for (code, table) in raw {
            let language: Language = code
                .parse()
                .map_err(|_| CatalogError::UnknownLanguage(code.clone()))?;
            for (key, value) in table {
                catalog.insert(language, key, value);
            }
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(mut self, other: Catalog) -> Self {
        for (language, table) in other.tables {
            self.tables.entry(language).or_default().extend(table);
        }
        self
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Lookup with fallback: active language, then English, then the key.
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(text) = self.get(language, key) {
            return text;
        }
        if language != Language::En {
            if let Some(text) = self.get(Language::En, key) {
                tracing::debug!(%language, key, "translation missing; using English");
                return text;
            }
        }
        tracing::debug!(%language, key, "translation missing; using key");
        key
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
