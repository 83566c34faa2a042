//! `forgepos-core` — shared building blocks for the POS UI workspace.
//!
//! This crate contains **pure** primitives (no rendering, no runtime concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, UserId};
