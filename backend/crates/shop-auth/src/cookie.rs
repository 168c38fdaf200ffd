//! `Cookie` / `Set-Cookie` header helpers for the session and OAuth state cookies.

/// Build a `Set-Cookie` value. Cookies are always `HttpOnly; SameSite=Lax; Path=/`.
pub fn set_cookie_header(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut header = format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        name, value, max_age_secs
    );
    if secure {
        header.push_str("; Secure");
    }
    header
}

/// Build a `Set-Cookie` value that removes the cookie from the browser.
pub fn clear_cookie_header(name: &str, secure: bool) -> String {
    set_cookie_header(name, "", 0, secure)
}

/// Find a cookie by name in a `Cookie` request header value.
pub fn read_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
