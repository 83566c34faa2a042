//! Authentication provider contract and its in-memory implementation.

use tokio::sync::watch;

use crate::CurrentUser;

/// Read access to the current session.
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, or `None` when nobody is authenticated.
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Session state held in memory for the lifetime of the UI.
#[derive(Debug)]
pub struct AuthState {
    user: watch::Sender<Option<CurrentUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            user: watch::Sender::new(None),
        }
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: watch::Sender::new(Some(user)),
        }
    }

    pub fn sign_in(&self, user: CurrentUser) {
        tracing::info!(user_id = %user.id, role = %user.role, "user signed in");
        self.user.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        if let Some(previous) = self.user.send_replace(None) {
            tracing::info!(user_id = %previous.id, "user signed out");
        }
    }

    /// Receiver notified on every sign-in / sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<CurrentUser>> {
        self.user.subscribe()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for AuthState {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.borrow().clone()
    }
}
