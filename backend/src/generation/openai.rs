//! Generation backend speaking the OpenAI HTTP API.

use super::{GenerationBackend, UpstreamError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// Chat model and sampling used for mod source generation.
const CODE_MODEL: &str = "gpt-4";
const CODE_TEMPERATURE: f64 = 0.7;
const CODE_MAX_TOKENS: u32 = 3000;

const IMAGE_MODEL: &str = "dall-e-3";
// The texture instruction asks for 16x16 pixel art, but the provider only
// renders at fixed large sizes; 1024x1024 is the smallest square it supports.
// Clients scale the result down themselves.
const IMAGE_SIZE: &str = "1024x1024";
const IMAGE_QUALITY: &str = "standard";

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    /// Build a client with a bounded timeout applied to every outbound call,
    /// the image download included.
    pub fn new(
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<OpenAiClient, UpstreamError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(OpenAiClient {
            http,
            api_key: api_key.into(),
            api_base,
        })
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .post(format!("{}{}", self.api_base, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body: text });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenerationBackend for OpenAiClient {
    async fn generate_code(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, UpstreamError> {
        let body = json!({
            "model": CODE_MODEL,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": CODE_TEMPERATURE,
            "max_tokens": CODE_MAX_TOKENS
        });

        let value = self.post_json("/chat/completions", &body).await?;
        value["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| UpstreamError::Malformed("completion had no message content".to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, UpstreamError> {
        let body = json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "size": IMAGE_SIZE,
            "quality": IMAGE_QUALITY,
            "n": 1
        });

        let value = self.post_json("/images/generations", &body).await?;
        value["data"][0]["url"]
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| UpstreamError::Malformed("image response had no url".to_string()))
    }

    async fn download_image(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body: text });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
