use shop_core::{Product, User};

use uuid::Uuid;

/// Creates a linked user with an email
pub fn create_test_user_record(external_id: &str, email: &str) -> User {
    User::new(
        Some(external_id.to_string()),
        Some(email.to_string()),
        "Test User".to_string(),
    )
}

/// Creates a user with neither an external id nor an email
pub fn create_bare_user_record() -> User {
    User::new(None, None, "Bare User".to_string())
}

/// Creates a test Product with sensible defaults
pub fn create_test_product(merchant_id: Uuid) -> Product {
    Product::new(
        merchant_id,
        "Test Product",
        Some("Test product description".to_string()),
        1999,
    )
    .expect("valid test product")
}
