use crate::{DbError, Result as DbErrorResult};

use shop_core::Product;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_PRODUCT: &str = r#"
    SELECT id, merchant_id, name, description, price_cents, created_at, updated_at
    FROM products
"#;

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &Product) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO products (
                    id, merchant_id, name, description, price_cents, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(product.merchant_id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.created_at.timestamp())
        .bind(product.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Product>> {
        let row = sqlx::query(&format!("{SELECT_PRODUCT} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    /// Newest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<Product>> {
        let rows = sqlx::query(&format!(
            "{SELECT_PRODUCT} ORDER BY created_at DESC, name"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(product_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_merchant(&self, merchant_id: Uuid) -> DbErrorResult<Vec<Product>> {
        let rows = sqlx::query(&format!(
            "{SELECT_PRODUCT} WHERE merchant_id = ? ORDER BY created_at DESC, name"
        ))
        .bind(merchant_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(product_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update(&self, product: &Product) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE products
                SET name = ?, description = ?, price_cents = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.updated_at.timestamp())
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "product",
                id: product.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn product_from_row(r: &SqliteRow) -> DbErrorResult<Product> {
    let id: String = r.try_get("id")?;
    let merchant_id: String = r.try_get("merchant_id")?;
    let created_at: i64 = r.try_get("created_at")?;
    let updated_at: i64 = r.try_get("updated_at")?;

    Ok(Product {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in products.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        merchant_id: Uuid::parse_str(&merchant_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in products.merchant_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        price_cents: r.try_get("price_cents")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in products.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in products.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
