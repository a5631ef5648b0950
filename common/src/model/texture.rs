use serde::{Deserialize, Serialize};

/// One generated texture: the provider's temporary URL, the downloaded image
/// bytes re-encoded as base64, and the prompt that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureSlot {
    pub url: String,
    pub data: String,
    pub prompt: String,
}

/// The textures payload stored on a mod row, keyed by slot name.
/// Only the `main_texture` slot exists today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TexturesData {
    pub main_texture: TextureSlot,
}
