use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::routes::response::ApiResponse;
use crate::routes::validation::FieldErrors;
use crate::AppState;

/// Body of `POST /user`
///
/// Every field is optional at the serde level so that missing fields are
/// reported by validation instead of as a decode failure.
#[derive(Deserialize)]
pub struct SaveUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "presstimes")]
    pub press_times: Option<Vec<i64>>,
    #[serde(rename = "intervaltimes")]
    pub interval_times: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct SaveUserResponse {
    #[serde(flatten)]
    pub envelope: ApiResponse,
    pub username: String,
}

impl SaveUserRequest {
    /// Check required fields and turn the request into a [`NewUser`]
    pub fn validate(self) -> Result<NewUser> {
        let mut errors = FieldErrors::default();
        let username = errors.require_text("username", self.username);
        let password = errors.require_text("password", self.password);
        let press_times = errors.require_samples("presstimes", self.press_times);
        let interval_times = errors.require_samples("intervaltimes", self.interval_times);

        match (username, password, press_times, interval_times) {
            (Some(username), Some(password), Some(press_times), Some(interval_times))
                if errors.is_empty() =>
            {
                Ok(NewUser {
                    username,
                    password,
                    press_times,
                    interval_times,
                })
            }
            _ => Err(errors.into_error()),
        }
    }
}

/// Save a new user with their typing-rhythm samples
///
/// Returns 409 Conflict if the username is already taken.
///
/// POST /user
pub async fn save_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveUserRequest>, JsonRejection>,
) -> Result<Json<SaveUserResponse>> {
    const OP: &str = "routes::save::save_user";

    let Json(payload) = payload?;
    let user = payload.validate().map_err(|e| {
        tracing::warn!(op = OP, error = %e, "failed to validate request");
        e
    })?;

    tracing::debug!(
        op = OP,
        username = %user.username,
        press_samples = user.press_times.len(),
        interval_samples = user.interval_times.len(),
        "request body decoded"
    );

    let username = state.store.save_user(&user).await.map_err(|e| {
        let err = AppError::from_store("failed to save user", e);
        if matches!(err, AppError::UserExists) {
            tracing::info!(op = OP, username = %user.username, "user already exists");
        }
        err
    })?;

    tracing::info!(op = OP, username = %username, "user saved");

    Ok(Json(SaveUserResponse {
        envelope: ApiResponse::ok(),
        username,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SaveUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_request_validates() {
        let request = parse(json!({
            "username": "alice",
            "password": "p1",
            "presstimes": [10, 20],
            "intervaltimes": [5, 6]
        }));

        let user = request.validate().unwrap();
        assert_eq!(
            user,
            NewUser {
                username: "alice".to_string(),
                password: "p1".to_string(),
                press_times: vec![10, 20],
                interval_times: vec![5, 6],
            }
        );
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let request = parse(json!({ "password": "p1", "intervaltimes": [] }));

        let err = request.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "field username is required, field presstimes is required"
        );
    }

    #[test]
    fn test_null_sequence_is_missing() {
        let request = parse(json!({
            "username": "alice",
            "password": "p1",
            "presstimes": null,
            "intervaltimes": [1]
        }));

        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }
}
