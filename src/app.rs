//! Root application component with routing and the auth provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::{AuthContext, AuthProvider, use_auth};
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::pages::{profile::ProfilePage, todos::TodosPage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Sets up routing, mounts `AuthProvider` inside the router so it can watch
/// the query string, and restores the stored theme.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::current();
    let ui = RwSignal::new(UiState::default());

    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    let chrome_config = config.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/daily-tasks.css"/>
        <Title text="Daily Tasks"/>

        <Router>
            <AuthProvider config=config>
                <AppChrome config=chrome_config.clone() ui=ui/>
            </AuthProvider>
        </Router>
    }
}

/// Navbar plus routed pages; bridges the auth context into explicit props.
#[component]
fn AppChrome(config: AppConfig, ui: RwSignal<UiState>) -> impl IntoView {
    let AuthContext { session, login } = use_auth();

    view! {
        <Navbar session=session login=login ui=ui/>
        <main class="container">
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <TodosPage config=config.clone()/> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=move || view! { <ProfilePage session=session login=login/> }
                />
            </Routes>
        </main>
    }
}
