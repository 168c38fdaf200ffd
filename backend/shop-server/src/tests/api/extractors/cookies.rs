use crate::cookie_value;

use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

#[test]
fn test_cookie_value_found_in_single_header() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("a=1; shop_session=tok; b=2"));

    assert_eq!(cookie_value(&headers, "shop_session"), Some("tok"));
}

#[test]
fn test_cookie_value_found_in_second_header() {
    let mut headers = HeaderMap::new();
    headers.append(COOKIE, HeaderValue::from_static("a=1"));
    headers.append(COOKIE, HeaderValue::from_static("shop_session=tok"));

    assert_eq!(cookie_value(&headers, "shop_session"), Some("tok"));
}

#[test]
fn test_cookie_value_missing() {
    let headers = HeaderMap::new();

    assert_eq!(cookie_value(&headers, "shop_session"), None);
}
