use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Only products of this merchant
    #[serde(default)]
    pub merchant_id: Option<String>,
}
