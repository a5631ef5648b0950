//! Boundary to the upstream generation provider.
//!
//! Handlers talk to [`GenerationBackend`] only; the OpenAI implementation
//! lives in [`openai`] and tests substitute a canned double.

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failures crossing the upstream boundary. No retries happen anywhere; a
/// transient failure is a hard failure for the invocation.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP call itself failed (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The provider answered 2xx but the payload lacked the expected field.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

/// The three outbound operations the handlers perform.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Run a chat completion and return the assistant message verbatim.
    async fn generate_code(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, UpstreamError>;

    /// Generate one image and return its temporary URL.
    async fn generate_image(&self, prompt: &str) -> Result<String, UpstreamError>;

    /// Fetch the raw bytes behind a previously returned image URL.
    async fn download_image(&self, url: &str) -> Result<Vec<u8>, UpstreamError>;
}
