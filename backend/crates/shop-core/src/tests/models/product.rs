use crate::{CoreError, MAX_NAME_LENGTH, Product};

use uuid::Uuid;

#[test]
fn test_product_new_trims_name() {
    let merchant_id = Uuid::new_v4();
    let product = Product::new(merchant_id, "  Teapot ", None, 1299).unwrap();

    assert_eq!(product.name, "Teapot");
    assert_eq!(product.price_cents, 1299);
    assert!(product.is_owned_by(merchant_id));
    assert!(!product.is_owned_by(Uuid::new_v4()));
}

#[test]
fn test_product_new_rejects_blank_name() {
    let result = Product::new(Uuid::new_v4(), "   ", None, 100);
    assert!(matches!(result, Err(CoreError::Validation { field: Some(ref f), .. }) if f == "name"));
}

#[test]
fn test_product_new_rejects_long_name() {
    let name = "x".repeat(MAX_NAME_LENGTH + 1);
    assert!(Product::new(Uuid::new_v4(), &name, None, 100).is_err());
}

#[test]
fn test_product_new_rejects_negative_price() {
    let result = Product::new(Uuid::new_v4(), "Teapot", None, -1);
    assert!(
        matches!(result, Err(CoreError::Validation { field: Some(ref f), .. }) if f == "price_cents")
    );
}

#[test]
fn test_product_apply_update_keeps_untouched_fields() {
    let mut product =
        Product::new(Uuid::new_v4(), "Teapot", Some("Blue".to_string()), 1000).unwrap();

    product.apply_update(None, None, Some(1500)).unwrap();

    assert_eq!(product.name, "Teapot");
    assert_eq!(product.description.as_deref(), Some("Blue"));
    assert_eq!(product.price_cents, 1500);
}

#[test]
fn test_product_apply_update_validates() {
    let mut product = Product::new(Uuid::new_v4(), "Teapot", None, 1000).unwrap();
    assert!(product.apply_update(Some(""), None, None).is_err());
}
