//! Translation of provider results and failures into HTTP responses.
//!
//! Successful results are sent as their JSON value with `200 OK`. Failures
//! become an [`ErrorResponse`] body whose status follows the failure kind:
//!
//! | failure | status |
//! |---|---|
//! | `NotFound`, `Invalid` | 404 |
//! | `MissingParameter`, `TooManyArguments`, `MalformedParameter` | 400 |
//! | `Unexpected` | 500, generic message |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::ProviderError;

/// Error body sent with every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
#[must_use]
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// HTTP status for a provider failure
#[must_use]
pub fn status_for(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::NotFound(_) | ProviderError::Invalid(_) => StatusCode::NOT_FOUND,
        ProviderError::MissingParameter { .. }
        | ProviderError::TooManyArguments { .. }
        | ProviderError::MalformedParameter { .. } => StatusCode::BAD_REQUEST,
        ProviderError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Response for a provider failure
#[must_use]
pub fn error_response(err: &ProviderError) -> Response {
    let body = match err {
        ProviderError::Unexpected(internal) => create_safe_error_response(
            err.error_type(),
            "Internal server error",
            Some(internal),
        ),
        _ => create_safe_error_response(err.error_type(), &err.to_string(), None),
    };
    (status_for(err), Json(body)).into_response()
}

/// Response for a dispatched operation
#[must_use]
pub fn respond(result: Result<Value, ProviderError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ProviderError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ProviderError::Invalid("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ProviderError::MalformedParameter {
                parameter: "start_i",
                value: "abc".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ProviderError::Unexpected("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unexpected_error_hides_details() {
        let response = error_response(&ProviderError::Unexpected(
            "connection refused at 10.0.0.5:5432".into(),
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["error_type"], "internal_error");
        assert_eq!(body["details"], Value::Null);
        assert!(!body.to_string().contains("10.0.0.5"));
    }

    #[tokio::test]
    async fn test_missing_parameter_body() {
        let response = error_response(&ProviderError::MissingParameter {
            operation: "get_tx_info",
            parameter: "alt_aln_method",
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(body.error_type, "missing_parameter");
        assert!(body.error.contains("alt_aln_method"));
    }

    #[tokio::test]
    async fn test_success_passes_value_through() {
        let response = respond(Ok(serde_json::json!({"tx_ac": "NM_1", "alt_ac": "NC_1"})));
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["tx_ac", "alt_ac"]);
    }
}
