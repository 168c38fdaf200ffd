//! Current-user REST API handlers

use crate::{ApiError, ApiResult, AppState, CurrentUser, SetRoleRequest, UserResponse};

use shop_core::Role;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/v1/me
pub async fn get_me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/me/role
///
/// One-time role choice for a freshly created account
pub async fn set_role(
    State(state): State<AppState>,
    CurrentUser(mut user): CurrentUser,
    Json(req): Json<SetRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let role: Role = req.role.trim().parse()?;
    user.assign_role(role)?;

    // Conditional write: a concurrent request may have chosen first
    let assigned = state
        .users()
        .assign_role(user.id, role, user.updated_at)
        .await?;

    if !assigned {
        return Err(ApiError::Conflict {
            message: "Role already chosen".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("User {} chose role {}", user.id, role);

    Ok(Json(UserResponse { user: user.into() }))
}
