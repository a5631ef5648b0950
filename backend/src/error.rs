//! Error taxonomy shared by the three endpoints.
//!
//! Every failure path funnels into [`ApiError`], whose `ResponseError` impl
//! produces the documented status code with the CORS header and a JSON
//! `{"error": ...}` body. Handlers only ever return `Result<HttpResponse,
//! ApiError>` and let actix render the error side.

use crate::generation::UpstreamError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Header present on every response, success or error.
pub const CORS_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or empty, or the body is not JSON.
    #[error("{0}")]
    Validation(String),
    /// The endpoint was called with a verb it does not serve.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// A texture update targeted an id with no matching row.
    #[error("mod {0} not found")]
    NotFound(String),
    /// The generation provider or the image download failed.
    #[error("generation service error: {0}")]
    Upstream(#[from] UpstreamError),
    /// A payload could not be encoded for storage.
    #[error("failed to encode stored payload: {0}")]
    Encoding(#[from] serde_json::Error),
    /// The mods database could not be opened, read, or written.
    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("request failed: {}", self);
        }
        HttpResponse::build(self.status_code())
            .insert_header(CORS_ORIGIN)
            .json(json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn maps_variants_to_documented_status_codes() {
        assert_eq!(
            ApiError::Validation("Prompt is required".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::NotFound("mod_x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream(UpstreamError::Malformed("no content".to_string())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Persistence(rusqlite::Error::QueryReturnedNoRows).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[actix_web::test]
    async fn error_response_carries_cors_and_json_body() {
        let response = ApiError::MethodNotAllowed.error_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response
                .headers()
                .get("Access-Control-Allow-Origin")
                .expect("CORS header"),
            "*"
        );

        let bytes = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("read body");
        let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(body["error"], "Method not allowed");
    }
}
