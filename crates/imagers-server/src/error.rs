//! Request failures and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use imagers_core::{DecodeError, EncodeError, UnsupportedFormatError};

use crate::fetch::FetchError;
use crate::types::ImageResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or invalid field values.
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::UnsupportedFormat(_)
            | ApiError::Fetch(_)
            | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(ImageResponse::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let cases = [
            ApiError::Validation("missing field".to_string()),
            ApiError::UnsupportedFormat(UnsupportedFormatError("webp".to_string())),
            ApiError::Fetch(FetchError::Transport("connection refused".to_string())),
            ApiError::Decode(DecodeError::InvalidFormat),
        ];
        for err in cases {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{err}");
        }
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let encode = ApiError::Encode(EncodeError::EncodingFailed("boom".to_string()));
        assert_eq!(encode.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = ApiError::Internal("task panicked".to_string());
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages() {
        let err = ApiError::from(UnsupportedFormatError("webp".to_string()));
        assert_eq!(err.to_string(), "Unsupported format: webp");

        let err = ApiError::from(DecodeError::InvalidFormat);
        assert_eq!(
            err.to_string(),
            "Failed to decode image: Invalid or unsupported image format"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
