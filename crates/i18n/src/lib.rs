//! `forgepos-i18n` — display languages and translated strings.
//!
//! Translation keys use dotted namespaces (`"header.title"`,
//! `"cart.low.stock"`). Lookups fall back to English when the active
//! language lacks a key, and to the key itself when English lacks it too,
//! so a missing string never breaks a render.

pub mod catalog;
pub mod language;
pub mod translator;

pub use catalog::{Catalog, CatalogError};
pub use language::{Language, TextDirection};
pub use translator::{Localized, Translator};
