//! Errors raised at the edges of the UI layer.
//!
//! Rendering itself is total; these only come from configuration, catalog
//! and bootstrap loading, and mounting components that need a runtime.

use forgepos_core::DomainError;
use forgepos_i18n::CatalogError;
use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("no async runtime available to drive the header clock")]
    NoRuntime,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("malformed bootstrap payload: {0}")]
    Bootstrap(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl UiError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
