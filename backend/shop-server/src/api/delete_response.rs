use serde::Serialize;

/// Response body for successful deletions
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: String,
}
