use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::routes::response::ApiResponse;
use crate::routes::validation::validate_username;
use crate::AppState;

/// Delete a user and their stored samples
///
/// This action is irreversible; the username becomes free for a new save.
///
/// DELETE /user/:username
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse>> {
    const OP: &str = "routes::delete::delete_user";

    validate_username(&username)?;

    state
        .store
        .delete_user(&username)
        .await
        .map_err(|e| AppError::from_store("failed to delete user", e))?;

    tracing::info!(op = OP, username = %username, "user deleted");

    Ok(Json(ApiResponse::ok()))
}
