use serde::Deserialize;

/// Partial update; omitted fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub price_cents: Option<i64>,
}
