//! Top navigation bar: brand, login/user badge, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route above the page outlet. Login goes through the
//! provider's `login` callback so the redirect target lives only in
//! `AppConfig`.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Label for the signed-in user, if any.
pub fn user_badge(session: &SessionState) -> Option<String> {
    session.user().map(|user| user.display_name().to_owned())
}

/// Theme toggle glyph: offer the mode the user is not in.
pub fn theme_toggle_glyph(dark_mode: bool) -> &'static str {
    if dark_mode { "☀" } else { "☾" }
}

#[component]
pub fn Navbar(session: Signal<SessionState>, login: Callback<()>, ui: RwSignal<UiState>) -> impl IntoView {
    let badge = move || session.with(user_badge);

    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                <img src="/logo.svg" alt="logo" width="40" height="40"/>
                <span class="navbar__title">"Daily Tasks"</span>
            </a>
            <Show
                when=move || badge().is_some()
                fallback=move || {
                    view! {
                        <button class="btn navbar__login" on:click=move |_| login.run(())>
                            "Login"
                        </button>
                    }
                }
            >
                <a href="/profile" class="navbar__user">{move || badge().unwrap_or_default()}</a>
            </Show>

            <span class="navbar__spacer"></span>

            <button class="btn navbar__theme-toggle" on:click=on_toggle_theme title="Toggle color mode">
                {move || theme_toggle_glyph(ui.get().dark_mode)}
            </button>
        </nav>
    }
}
