use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    /// "merchant" or "client"
    pub role: String,
}
