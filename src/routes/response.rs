use serde::Serialize;

use crate::constants::{STATUS_ERROR, STATUS_OK};

/// Envelope shared by every endpoint
///
/// `error` is always present and empty on success. Endpoints that return data
/// flatten this envelope into their own response type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub error: String,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            error: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": "OK", "error": "" }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::error("user not found")).unwrap();
        assert_eq!(value, json!({ "status": "ERROR", "error": "user not found" }));
    }
}
