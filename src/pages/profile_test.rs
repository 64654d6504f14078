use super::*;
use crate::net::types::User;

fn make_user(name: &str, picture: &str) -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: name.to_owned(),
        picture_url: picture.to_owned(),
    }
}

#[test]
fn unset_session_has_no_card() {
    assert_eq!(ProfileCard::from_session(&SessionState::unset()), None);
}

#[test]
fn card_reflects_user() {
    let session = SessionState::authenticated(make_user("Ada", "https://img.example.com/a.png"), "tok");
    assert_eq!(
        ProfileCard::from_session(&session),
        Some(ProfileCard {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            picture_url: Some("https://img.example.com/a.png".to_owned()),
        })
    );
}

#[test]
fn card_omits_empty_picture_and_falls_back_to_email() {
    let session = SessionState::authenticated(make_user("", ""), "tok");
    let card = ProfileCard::from_session(&session).unwrap();
    assert_eq!(card.name, "ada@example.com");
    assert_eq!(card.picture_url, None);
}
