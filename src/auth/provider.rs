//! `AuthProvider` component and the `use_auth` accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the router so it can watch the location. It owns the
//! session signal for the lifetime of the page, reconciles every new query
//! string, and publishes `{ session, login }` through Leptos context.
//! Components below it are handed those two values as props; `use_auth` is
//! for the few places that bridge context into props.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::AuthError;
use super::navigator::{self, BrowserNavigator, Navigator};
use super::reconcile::{HttpUserInfoSource, SessionReconciler, UserInfoSource};
use crate::config::AppConfig;
use crate::state::session::SessionState;

/// Session state and the login action, as seen by consumers.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Read-only view of the current session.
    pub session: Signal<SessionState>,
    /// Redirects the browser to the identity server's login entry point.
    pub login: Callback<()>,
}

/// Provides [`AuthContext`] to its children.
///
/// `source` and `navigator` default to the identity server and the browser
/// location.
#[component]
pub fn AuthProvider(
    config: AppConfig,
    #[prop(optional)] source: Option<Rc<dyn UserInfoSource>>,
    #[prop(optional)] navigator: Option<Arc<dyn Navigator + Send + Sync>>,
    children: Children,
) -> impl IntoView {
    let source: Rc<dyn UserInfoSource> = match source {
        Some(source) => source,
        None => Rc::new(HttpUserInfoSource::new(&config)),
    };
    let navigator: Arc<dyn Navigator + Send + Sync> = match navigator {
        Some(navigator) => navigator,
        None => Arc::new(BrowserNavigator),
    };
    let location = use_location();
    provide_auth(&config, source, navigator, location.search.into());

    children()
}

/// Create the session signal, start reconciling `search`, and publish the
/// resulting [`AuthContext`] in the current owner.
pub fn provide_auth(
    config: &AppConfig,
    source: Rc<dyn UserInfoSource>,
    navigator: Arc<dyn Navigator + Send + Sync>,
    search: Signal<String>,
) -> AuthContext {
    let (session, set_session) = signal(SessionState::unset());

    let login_config = config.clone();
    let login = Callback::new(move |()| navigator::login(&login_config, navigator.as_ref()));

    let reconciler = SessionReconciler::new(source);
    Effect::new(move || {
        let query = search.get();
        #[cfg(feature = "hydrate")]
        {
            let reconciler = reconciler.clone();
            leptos::task::spawn_local(async move {
                reconciler.reconcile(&query, &set_session).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&query, &reconciler, set_session);
        }
    });

    let ctx = AuthContext { session: session.into(), login };
    provide_context(ctx);
    ctx
}

/// Look up the [`AuthContext`] provided by an enclosing [`AuthProvider`].
///
/// # Errors
///
/// Returns `AuthError::OutsideProvider` when called outside the provider.
pub fn try_use_auth() -> Result<AuthContext, AuthError> {
    use_context::<AuthContext>().ok_or(AuthError::OutsideProvider)
}

/// Like [`try_use_auth`], but panics outside an [`AuthProvider`].
///
/// # Panics
///
/// Panics with `use_auth must be used within an AuthProvider` when there is no
/// enclosing provider. This is a wiring bug, not a runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_auth() {
        Ok(ctx) => ctx,
        Err(e) => panic!("{e}"),
    }
}
