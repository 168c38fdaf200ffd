use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Product name (required)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Price in the smallest currency unit (required, >= 0)
    pub price_cents: i64,
}
