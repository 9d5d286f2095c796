//! Response envelope returned by the API and AI services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `{ success, data?, error?, message?, timestamp }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Machine-readable error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.code().to_string()),
            message: Some(err.message()),
            timestamp: Utc::now(),
        }
    }

    /// Overrides the generation time, mostly for reproducible output.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn into_result(self) -> Result<Option<T>, AppError> {
        if self.success {
            return Ok(self.data);
        }
        let code = self.error.unwrap_or_else(|| "UNKNOWN_ERROR".to_string());
        let message = self.message.unwrap_or_default();
        Err(AppError::new(message, code))
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self::from_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixed() -> DateTime<Utc> {
        "2026-02-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn success_envelope_omits_error_fields() {
        let resp = ApiResponse::ok(json!({ "xp": 15 })).at(fixed());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "success": true,
                "data": { "xp": 15 },
                "timestamp": "2026-02-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let resp: ApiResponse<()> = AppError::not_found("Routine").into();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("NOT_FOUND"));
        assert_eq!(resp.message.as_deref(), Some("Routine not found"));
        assert!(resp.data.is_none());
    }

    #[test]
    fn into_result_unwraps_envelope() {
        let ok = ApiResponse::ok_with_message(3_u32, "created");
        assert_eq!(ok.message.as_deref(), Some("created"));
        assert_eq!(ok.into_result().unwrap(), Some(3));

        let failed: ApiResponse<u32> = ApiResponse::from_error(&AppError::auth_default());
        let err = failed.into_result().unwrap_err();
        assert_eq!(err.code(), "AUTH_ERROR");
        assert_eq!(err.to_string(), "Authentication required");
    }
}
