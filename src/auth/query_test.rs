use super::*;

#[test]
fn empty_query_has_no_token() {
    assert_eq!(access_token_from_query(""), None);
    assert_eq!(access_token_from_query("?"), None);
}

#[test]
fn unrelated_params_have_no_token() {
    assert_eq!(access_token_from_query("?page=2&sort=asc"), None);
}

#[test]
fn token_is_read_with_or_without_question_mark() {
    assert_eq!(access_token_from_query("?access_token=ya29.abc"), Some("ya29.abc".to_owned()));
    assert_eq!(access_token_from_query("access_token=ya29.abc"), Some("ya29.abc".to_owned()));
}

#[test]
fn token_is_found_among_other_params() {
    assert_eq!(access_token_from_query("?state=x&access_token=t0k&scope=email"), Some("t0k".to_owned()));
}

#[test]
fn token_is_percent_decoded() {
    assert_eq!(access_token_from_query("?access_token=a%2Fb%3Dc"), Some("a/b=c".to_owned()));
}

#[test]
fn empty_token_counts_as_absent() {
    assert_eq!(access_token_from_query("?access_token="), None);
    assert_eq!(access_token_from_query("?access_token"), None);
}

#[test]
fn first_occurrence_wins() {
    assert_eq!(access_token_from_query("?access_token=first&access_token=second"), Some("first".to_owned()));
}
