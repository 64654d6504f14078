//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `AuthProvider` and handed to consumers as a read-only signal.
//! The constructors are the only way to build a value, which keeps
//! `is_authenticated()` and the presence of a user in lockstep.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Whether a user is logged in, who they are, and the token that proved it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
    access_token: Option<String>,
}

impl SessionState {
    /// No session; the state every page load starts in.
    pub fn unset() -> Self {
        Self::default()
    }

    /// A session populated from a successful user-info fetch.
    pub fn authenticated(user: User, access_token: impl Into<String>) -> Self {
        Self { user: Some(user), access_token: Some(access_token.into()) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
