//! Redirect-based login and session reconciliation.
//!
//! ARCHITECTURE
//! ============
//! - `query`: pulls the `access_token` out of the page URL
//! - `reconcile`: fetches the user behind a token and writes the session,
//!   discarding superseded responses
//! - `navigator`: the login redirect
//! - `provider`: the Leptos component that wires the above to the router and
//!   publishes the session to the UI tree

pub mod navigator;
pub mod provider;
pub mod query;
pub mod reconcile;

pub use provider::{AuthContext, AuthProvider, try_use_auth, use_auth};

use crate::net::api::ApiError;

/// Errors raised by the auth flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("user info request failed: {0}")]
    UserInfo(#[from] ApiError),
    #[error("use_auth must be used within an AuthProvider")]
    OutsideProvider,
}
