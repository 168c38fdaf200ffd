use shop_auth::read_cookie;

use axum::http::{HeaderMap, header::COOKIE};

/// Value of the named cookie across all `Cookie` headers of a request
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|header| read_cookie(header, name))
}
