//! Input normalization for identity fields.

/// Trim and lowercase an email address.
///
/// Returns `None` for an absent or blank value, so that "no email" is always
/// represented the same way in the store.
pub fn normalize_email(email: Option<&str>) -> Option<String> {
    email
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

/// Trim a display name. Blank names count as absent.
pub fn normalize_display_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
