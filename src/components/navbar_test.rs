use super::*;
use crate::net::types::User;

#[test]
fn no_badge_without_session() {
    assert_eq!(user_badge(&SessionState::unset()), None);
}

#[test]
fn badge_shows_display_name() {
    let user = User {
        id: "1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: String::new(),
        picture_url: String::new(),
    };
    let session = SessionState::authenticated(user, "tok");
    assert_eq!(user_badge(&session).as_deref(), Some("ada@example.com"));
}

#[test]
fn toggle_glyph_offers_other_mode() {
    assert_eq!(theme_toggle_glyph(false), "☾");
    assert_eq!(theme_toggle_glyph(true), "☀");
}
