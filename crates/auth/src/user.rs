use serde::{Deserialize, Serialize};

use forgepos_core::UserId;

use crate::Role;

/// Snapshot of the signed-in user, as exposed by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            role,
        }
    }
}
