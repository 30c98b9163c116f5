//! Explicit session context.
//!
//! A [`Session`] caches the identity returned by the first `/users/me` call.
//! Once resolved it is not re-fetched until [`Session::invalidate`] or
//! [`Session::expire`] resets it.
//!
//! ```text
//! Unresolved ─ populate(Some) → Authenticated ─ expire → Expired
//!            ─ populate(None) → Anonymous
//! any ─ invalidate → Unresolved
//! ```

use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unresolved,
    Authenticated(User),
    Anonymous,
    /// An authenticated call was rejected; the user must log in again.
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session already holding `user`.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self {
            state: SessionState::Authenticated(user),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Record the outcome of the identity fetch.
    pub fn populate(&mut self, user: Option<User>) {
        self.state = user.map_or(SessionState::Anonymous, SessionState::Authenticated);
    }

    /// Forget the cached identity (logout).
    pub fn invalidate(&mut self) {
        self.state = SessionState::Unresolved;
    }

    /// Authentication failure on some call.
    pub fn expire(&mut self) {
        self.state = SessionState::Expired;
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        !matches!(self.state, SessionState::Unresolved)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    #[must_use]
    pub const fn needs_login(&self) -> bool {
        matches!(self.state, SessionState::Anonymous | SessionState::Expired)
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The current user, or [`CoreError::NotAuthenticated`].
    pub fn require_user(&self) -> Result<&User, CoreError> {
        self.current_user().ok_or(CoreError::NotAuthenticated)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(User::is_admin)
    }
}
