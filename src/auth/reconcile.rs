//! Turns an `access_token` in the page URL into a populated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! After the identity server redirects back with `?access_token=...`, the
//! provider hands each new query string to [`SessionReconciler::reconcile`].
//! The reconciler fetches the user behind the token and writes the result to
//! a [`SessionSink`] (the provider's session signal in the app, a plain cell
//! in tests).
//!
//! CONCURRENCY
//! ===========
//! Every fetch is tagged with a request generation taken from a shared atomic
//! counter. A response may only write the session while its generation is
//! still the latest, so a slow response for an old URL cannot overwrite the
//! result of a newer one. Fetches are never cancelled; superseded responses
//! are dropped when they arrive.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and leave the session untouched. Nothing is
//! surfaced to the user and nothing is retried.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use leptos::prelude::{Set, WriteSignal};

use super::AuthError;
use super::query::access_token_from_query;
use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::User;
use crate::state::session::SessionState;

/// Resolves an access token to the user it belongs to.
#[async_trait(?Send)]
pub trait UserInfoSource {
    async fn fetch_user_info(&self, access_token: &str) -> Result<User, AuthError>;
}

#[async_trait(?Send)]
impl<T: UserInfoSource + ?Sized> UserInfoSource for Rc<T> {
    async fn fetch_user_info(&self, access_token: &str) -> Result<User, AuthError> {
        (**self).fetch_user_info(access_token).await
    }
}

/// `UserInfoSource` backed by the identity server's `/auth/userinfo`.
#[derive(Clone, Debug)]
pub struct HttpUserInfoSource {
    userinfo_url: String,
}

impl HttpUserInfoSource {
    pub fn new(config: &AppConfig) -> Self {
        Self { userinfo_url: config.userinfo_url() }
    }
}

#[async_trait(?Send)]
impl UserInfoSource for HttpUserInfoSource {
    async fn fetch_user_info(&self, access_token: &str) -> Result<User, AuthError> {
        api::fetch_user_info(&self.userinfo_url, access_token).await.map_err(AuthError::from)
    }
}

/// Destination for reconciled session state.
pub trait SessionSink {
    fn store(&self, state: SessionState);
}

impl SessionSink for WriteSignal<SessionState> {
    fn store(&self, state: SessionState) {
        self.set(state);
    }
}

/// Monotonic request-generation counter shared by clones of a reconciler.
#[derive(Clone, Debug, Default)]
pub struct RequestGenerations(Arc<AtomicU64>);

impl RequestGenerations {
    /// Start a new generation, superseding every earlier one.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

/// A user-info fetch that has been started but not applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFetch {
    pub generation: u64,
    pub access_token: String,
}

/// What a reconciliation pass did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciled {
    /// The query carried no access token; nothing was fetched.
    NoToken,
    /// The session now holds the fetched user and token.
    Authenticated,
    /// The fetch failed; the session was left as it was.
    Failed,
    /// A newer fetch started before this one finished; the response was dropped.
    Superseded,
}

/// Drives query-string changes into session state.
#[derive(Clone, Debug)]
pub struct SessionReconciler<S> {
    source: S,
    generations: RequestGenerations,
}

impl<S: UserInfoSource> SessionReconciler<S> {
    pub fn new(source: S) -> Self {
        Self { source, generations: RequestGenerations::default() }
    }

    /// Start a fetch for the token in `query`, if there is one.
    pub fn begin(&self, query: &str) -> Option<PendingFetch> {
        let access_token = access_token_from_query(query)?;
        let generation = self.generations.advance();
        log::debug!("starting user info fetch (generation {generation})");
        Some(PendingFetch { generation, access_token })
    }

    /// Apply the outcome of `pending` to `sink` unless it was superseded.
    pub fn finish(&self, pending: PendingFetch, result: Result<User, AuthError>, sink: &impl SessionSink) -> Reconciled {
        if !self.generations.is_latest(pending.generation) {
            log::debug!("dropping superseded user info response (generation {})", pending.generation);
            return Reconciled::Superseded;
        }
        match result {
            Ok(user) => {
                log::info!("session established for {}", user.email);
                sink.store(SessionState::authenticated(user, pending.access_token));
                Reconciled::Authenticated
            }
            Err(e) => {
                log::error!("failed to fetch user info: {e}");
                Reconciled::Failed
            }
        }
    }

    /// Reconcile the session with the current page query string.
    pub async fn reconcile(&self, query: &str, sink: &impl SessionSink) -> Reconciled {
        let Some(pending) = self.begin(query) else {
            return Reconciled::NoToken;
        };
        let result = self.source.fetch_user_info(&pending.access_token).await;
        self.finish(pending, result, sink)
    }
}
