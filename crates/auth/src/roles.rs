use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role shown next to the user's name in the header badge.
///
/// Roles are opaque strings at this layer; the identity backend decides what
/// they mean.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const CASHIER: Role = Role(Cow::Borrowed("cashier"));
    pub const MANAGER: Role = Role(Cow::Borrowed("manager"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
