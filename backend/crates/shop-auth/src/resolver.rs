use crate::{AuthError, Result as AuthErrorResult, UserStore};

use std::sync::Arc;

use log::{debug, info, warn};
use shop_core::{ExternalProfile, User};
use shop_db::{DbError, Result as DbErrorResult};

/// Maps an external identity onto exactly one local user record.
///
/// Lookup order is external id, then normalized email (linking the external
/// id onto that record), then creation. Uniqueness is enforced by the store;
/// a write that loses a race is retried once, which then finds or links
/// the competing record.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, profile: &ExternalProfile) -> AuthErrorResult<User> {
        match self.resolve_once(profile).await {
            Ok(user) => Ok(user),
            Err(DbError::UniqueViolation { constraint, .. }) => {
                warn!(
                    "Write for external id {} hit a unique constraint ({}), retrying",
                    profile.external_id, constraint
                );
                // The competing record is visible now, so the second pass
                // resolves or links it instead of creating.
                match self.resolve_once(profile).await {
                    Ok(user) => Ok(user),
                    Err(DbError::UniqueViolation { .. }) => Err(AuthError::store_failure(format!(
                        "unique constraint violated twice for external id {}",
                        profile.external_id
                    ))),
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn resolve_once(&self, profile: &ExternalProfile) -> DbErrorResult<User> {
        if let Some(user) = self
            .store
            .find_by_external_id(&profile.external_id)
            .await?
        {
            debug!("Resolved external id {} to user {}", profile.external_id, user.id);
            return Ok(user);
        }

        if let Some(email) = profile.normalized_email()
            && let Some(mut user) = self.store.find_by_email(&email).await?
        {
            user.link_external_id(&profile.external_id);
            self.store.update(&user).await?;
            info!(
                "Linked external id {} to existing user {}",
                profile.external_id, user.id
            );
            return Ok(user);
        }

        let user = User::from_profile(profile);
        self.store.create(&user).await?;
        info!(
            "Created user {} for external id {}",
            user.id, profile.external_id
        );
        Ok(user)
    }
}
