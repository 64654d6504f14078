//! Access-token extraction from the page query string.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Query parameter the identity server appends when redirecting back.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Return the `access_token` value carried by `search`, if any.
///
/// Accepts the query with or without its leading `?`. Values are
/// form-urlencoded decoded and the first occurrence wins; an empty value
/// counts as absent.
pub fn access_token_from_query(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(search.as_bytes())
        .find(|(key, _)| key == ACCESS_TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
