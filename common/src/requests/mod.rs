use serde::Deserialize;

/// Game version used when the client omits one.
pub const DEFAULT_MINECRAFT_VERSION: &str = "1.20.1";

/// Mod name used when the client omits one.
pub const DEFAULT_MOD_NAME: &str = "custom_mod";

/// Request payload for the code generation endpoint.
///
/// Only `prompt` is required; the handler rejects it when empty. The other
/// fields fall back to fixed defaults so a minimal `{"prompt": ...}` body is
/// a complete request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateModRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_minecraft_version")]
    pub minecraft_version: String,
    #[serde(default = "default_mod_name")]
    pub mod_name: String,
}

fn default_minecraft_version() -> String {
    DEFAULT_MINECRAFT_VERSION.to_string()
}

fn default_mod_name() -> String {
    DEFAULT_MOD_NAME.to_string()
}

/// Request payload for the texture generation endpoint. Both fields are
/// required; defaults only exist so missing fields surface as validation
/// errors instead of deserialization errors.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTexturesRequest {
    #[serde(default)]
    pub mod_id: String,
    #[serde(default)]
    pub description: String,
}
