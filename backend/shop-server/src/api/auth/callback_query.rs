use serde::Deserialize;

/// Query string the provider appends when redirecting back
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    /// Set instead of `code` when the user declined or the provider failed
    #[serde(default)]
    pub error: Option<String>,
}
