//! `forgepos-ui`
//!
//! **Responsibility:** presentational components of the point-of-sale screen.
//!
//! This crate provides:
//! - Providers for shared UI state (language, theme) plus the translation and
//!   authentication accessors components read from
//! - Pure view builders turning props + provider snapshots into view structs
//! - Component handles wiring callbacks, and the header's live clock
//! - A Leptos frontend (wasm32 only) mounting the same views in the browser
//!
//! Components never own domain state. Products, users, and catalogs come
//! from outside and are only read.

pub mod bootstrap;
pub mod callback;
pub mod components;
pub mod config;
pub mod error;
pub mod providers;
pub mod theme;

#[cfg(not(target_arch = "wasm32"))]
pub mod clock;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use bootstrap::Bootstrap;
pub use callback::Callback;
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use providers::{I18n, LanguageProvider, ThemeProvider, UiContext};
pub use theme::ThemeMode;

#[cfg(not(target_arch = "wasm32"))]
pub use clock::{Clock, ClockReading};
