//! Profile page showing the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::state::session::SessionState;

/// What the profile page renders for an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub email: String,
    pub picture_url: Option<String>,
}

impl ProfileCard {
    pub fn from_session(session: &SessionState) -> Option<Self> {
        let user = session.user()?;
        Some(Self {
            name: user.display_name().to_owned(),
            email: user.email.clone(),
            picture_url: Some(user.picture_url.clone()).filter(|url| !url.is_empty()),
        })
    }
}

#[component]
pub fn ProfilePage(session: Signal<SessionState>, login: Callback<()>) -> impl IntoView {
    let card = move || session.with(ProfileCard::from_session);

    view! {
        <section class="profile-page">
            {move || match card() {
                Some(card) => {
                    view! {
                        <div class="profile-card">
                            {card
                                .picture_url
                                .map(|src| {
                                    view! {
                                        <img class="profile-card__avatar" src=src alt="avatar"/>
                                    }
                                })}
                            <h2 class="profile-card__name">{card.name}</h2>
                            <p class="profile-card__email">{card.email}</p>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="profile-card profile-card--empty">
                            <p>"You are not logged in."</p>
                            <button class="btn" on:click=move |_| login.run(())>
                                "Login"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
