//! `forgepos-auth` — who is at the till.
//!
//! The POS layer never authenticates anyone itself. It consumes an
//! [`AuthProvider`] that may or may not have a signed-in [`CurrentUser`].

pub mod provider;
pub mod roles;
pub mod user;

pub use provider::{AuthProvider, AuthState};
pub use roles::Role;
pub use user::CurrentUser;
