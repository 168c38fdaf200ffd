use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, SubsecRound, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// A product listed by a merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Owning merchant (users.id)
    pub merchant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    #[track_caller]
    pub fn new(
        merchant_id: Uuid,
        name: &str,
        description: Option<String>,
        price_cents: i64,
    ) -> CoreResult<Self> {
        let now = Utc::now().trunc_subsecs(0);
        let product = Self {
            id: Uuid::new_v4(),
            merchant_id,
            name: name.trim().to_string(),
            description: description.map(|d| d.trim().to_string()),
            price_cents,
            created_at: now,
            updated_at: now,
        };
        product.validate()?;
        Ok(product)
    }

    /// Apply a partial update; untouched fields keep their value.
    #[track_caller]
    pub fn apply_update(
        &mut self,
        name: Option<&str>,
        description: Option<String>,
        price_cents: Option<i64>,
    ) -> CoreResult<()> {
        if let Some(name) = name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = description {
            self.description = Some(description.trim().to_string());
        }
        if let Some(price_cents) = price_cents {
            self.price_cents = price_cents;
        }
        self.validate()?;
        self.updated_at = Utc::now().trunc_subsecs(0);
        Ok(())
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.merchant_id == user_id
    }

    #[track_caller]
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() || self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(CoreError::Validation {
                message: format!("name must be 1-{} characters", MAX_NAME_LENGTH),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref description) = self.description
            && description.chars().count() > MAX_DESCRIPTION_LENGTH
        {
            return Err(CoreError::Validation {
                message: format!(
                    "description must be at most {} characters",
                    MAX_DESCRIPTION_LENGTH
                ),
                field: Some("description".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.price_cents < 0 {
            return Err(CoreError::Validation {
                message: "price_cents cannot be negative".to_string(),
                field: Some("price_cents".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
