use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::routes::response::ApiResponse;
use crate::routes::validation::validate_username;
use crate::AppState;

/// Stored timing data for one user
///
/// The password is never echoed back.
#[derive(Debug, Serialize)]
pub struct GetUserResponse {
    #[serde(flatten)]
    pub envelope: ApiResponse,
    pub username: String,
    #[serde(rename = "presstimes")]
    pub press_times: Vec<i64>,
    #[serde(rename = "intervaltimes")]
    pub interval_times: Vec<i64>,
}

/// Look up a user's stored typing-rhythm samples
///
/// GET /user/:username
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GetUserResponse>> {
    const OP: &str = "routes::get::get_user";

    validate_username(&username)?;

    let record = state.store.get_user(&username).await.map_err(|e| {
        let err = AppError::from_store("failed to get user", e);
        if matches!(err, AppError::UserNotFound) {
            tracing::info!(op = OP, username = %username, "user not found");
        }
        err
    })?;

    tracing::info!(op = OP, username = %username, "user found");

    Ok(Json(GetUserResponse {
        envelope: ApiResponse::ok(),
        username,
        press_times: record.press_times,
        interval_times: record.interval_times,
    }))
}
