use shop_core::Product;

use serde::Serialize;

/// Product DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub merchant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            merchant_id: p.merchant_id.to_string(),
            name: p.name,
            description: p.description,
            price_cents: p.price_cents,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
