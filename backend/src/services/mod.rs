//! The three HTTP endpoints. Each sub-module owns one route, exposes
//! `configure_routes()` for `main.rs`, and dispatches on the request method
//! itself so it can answer preflights and wrong verbs the same way on every
//! path.

pub mod generate_mod;
pub mod generate_textures;
pub mod list_mods;

#[cfg(test)]
pub(crate) mod test_support;

use crate::error::{ApiError, CORS_ORIGIN};
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 200 response with the CORS header every endpoint must carry.
pub(crate) fn ok_json(body: Value) -> HttpResponse {
    HttpResponse::Ok().insert_header(CORS_ORIGIN).json(body)
}

/// Permissive, bodyless answer to a CORS preflight.
pub(crate) fn preflight(allow_methods: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(CORS_ORIGIN)
        .insert_header(("Access-Control-Allow-Methods", allow_methods))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type"))
        .insert_header(("Access-Control-Max-Age", "86400"))
        .finish()
}

/// Decode a JSON request body. A missing body is treated as `{}` so field
/// defaults apply; anything else that fails to parse is a validation error.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let raw: &[u8] = if body.is_empty() { b"{}" } else { body };
    serde_json::from_slice(raw)
        .map_err(|e| ApiError::Validation(format!("invalid JSON body: {}", e)))
}
