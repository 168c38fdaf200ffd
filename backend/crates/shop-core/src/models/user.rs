//! User entity - the local record behind an external identity.

use crate::{CoreError, CoreResult, ExternalProfile, Role};

use std::panic::Location;

use chrono::{DateTime, SubsecRound, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name used when the provider does not share one.
pub const DEFAULT_DISPLAY_NAME: &str = "New user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Subject from the identity provider; `None` for accounts not linked yet
    pub external_id: Option<String>,
    /// Lowercased and trimmed; unique when present
    pub email: Option<String>,
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with no role.
    ///
    /// Timestamps are truncated to whole seconds, the precision of the store.
    pub fn new(external_id: Option<String>, email: Option<String>, display_name: String) -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            id: Uuid::new_v4(),
            external_id,
            email,
            display_name,
            role: Role::Unset,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the record for a first-time login from the provider profile.
    pub fn from_profile(profile: &ExternalProfile) -> Self {
        Self::new(
            Some(profile.external_id.clone()),
            profile.normalized_email(),
            profile
                .normalized_display_name()
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
        )
    }

    /// Attach an external identity to an existing (email-matched) record.
    pub fn link_external_id(&mut self, external_id: &str) {
        self.external_id = Some(external_id.to_string());
        self.touch();
    }

    /// Choose the account role. Allowed exactly once, and never back to `Unset`.
    #[track_caller]
    pub fn assign_role(&mut self, role: Role) -> CoreResult<()> {
        if role.is_unset() {
            return Err(CoreError::Validation {
                message: "role must be 'merchant' or 'client'".to_string(),
                field: Some("role".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.role.can_transition_to(role) {
            return Err(CoreError::RoleAlreadyAssigned {
                current: self.role,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.role = role;
        self.touch();
        Ok(())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().trunc_subsecs(0);
    }
}
