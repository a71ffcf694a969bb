use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::routes::response::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    #[serde(flatten)]
    pub envelope: ApiResponse,
    pub usernames: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FilteredUsersResponse {
    #[serde(flatten)]
    pub envelope: ApiResponse,
    /// Comma-joined usernames
    pub usernames: String,
}

/// List every stored username in insertion order
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>> {
    let usernames = state
        .store
        .list_usernames()
        .await
        .map_err(|e| AppError::from_store("failed to list users", e))?;

    tracing::debug!(count = usernames.len(), "users listed");

    Ok(Json(ListUsersResponse {
        envelope: ApiResponse::ok(),
        usernames,
    }))
}

/// List usernames whose password contains both `_` and `@`
///
/// GET /users/filtered
pub async fn list_filtered_users(
    State(state): State<AppState>,
) -> Result<Json<FilteredUsersResponse>> {
    let usernames = state
        .store
        .list_usernames_filtered()
        .await
        .map_err(|e| AppError::from_store("failed to list users", e))?;

    Ok(Json(FilteredUsersResponse {
        envelope: ApiResponse::ok(),
        usernames,
    }))
}
