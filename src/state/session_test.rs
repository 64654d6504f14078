use super::*;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        picture_url: "https://img.example.com/ada.png".to_owned(),
    }
}

#[test]
fn unset_has_no_user_or_token() {
    let state = SessionState::unset();
    assert!(state.user().is_none());
    assert!(state.access_token().is_none());
    assert!(!state.is_authenticated());
    assert_eq!(state, SessionState::default());
}

#[test]
fn authenticated_exposes_user_and_token() {
    let state = SessionState::authenticated(make_user(), "tok-1");
    assert!(state.is_authenticated());
    assert_eq!(state.user(), Some(&make_user()));
    assert_eq!(state.access_token(), Some("tok-1"));
}
