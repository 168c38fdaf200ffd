use crate::ProductDto;
use serde::Serialize;

/// Single product response
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductDto,
}
