use crate::constants::MAX_TIMING_SAMPLES;
use crate::error::AppError;

/// Collects field-level failures so a request reports all of them at once
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    /// Require a non-empty string field
    pub fn require_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.messages.push(format!("field {} is required", field));
                None
            }
        }
    }

    /// Require a timing sequence field; an empty array is accepted
    pub fn require_samples(&mut self, field: &str, value: Option<Vec<i64>>) -> Option<Vec<i64>> {
        match value {
            Some(v) if v.len() <= MAX_TIMING_SAMPLES => Some(v),
            Some(_) => {
                self.messages.push(format!("field {} is not valid", field));
                None
            }
            None => {
                self.messages.push(format!("field {} is required", field));
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_error(self) -> AppError {
        AppError::Validation(self.messages.join(", "))
    }
}

/// Reject an empty username taken from a path parameter
///
/// Uses the same rule as `require_text` on save, so any stored username
/// can be looked up and deleted.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.is_empty() {
        return Err(AppError::InvalidUsername);
    }
    Ok(())
}
