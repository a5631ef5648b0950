//! Texture generation endpoint.
//!
//! `POST /api/mods/textures` takes an existing mod id and an item
//! description, asks the image backend for a pixel-art icon, downloads the
//! produced image, and stores it base64-encoded under the `main_texture`
//! slot of the row's `textures_data` column. Targeting an id with no row is
//! a 404; generation happens before the update, so the upstream calls are
//! spent either way.

use crate::error::ApiError;
use crate::services::{ok_json, parse_body, preflight};
use crate::state::AppState;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Resource};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use common::model::texture::{TextureSlot, TexturesData};
use common::requests::GenerateTexturesRequest;
use log::info;
use rusqlite::params;
use serde_json::json;

const API_PATH: &str = "/api/mods/textures";
const ALLOWED_METHODS: &str = "POST, OPTIONS";

pub fn configure_routes() -> Resource {
    web::resource(API_PATH).route(web::route().to(process))
}

pub(crate) async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(preflight(ALLOWED_METHODS));
    }
    if req.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let payload: GenerateTexturesRequest = parse_body(&body)?;
    generate_textures(&state, payload).await
}

async fn generate_textures(
    state: &AppState,
    payload: GenerateTexturesRequest,
) -> Result<HttpResponse, ApiError> {
    if payload.mod_id.is_empty() || payload.description.is_empty() {
        return Err(ApiError::Validation(
            "mod_id and description are required".to_string(),
        ));
    }

    let texture_prompt = build_texture_prompt(&payload.description);
    let image_url = state.generator.generate_image(&texture_prompt).await?;
    let image_bytes = state.generator.download_image(&image_url).await?;
    let image_base64 = BASE64.encode(&image_bytes);

    let textures = TexturesData {
        main_texture: TextureSlot {
            url: image_url.clone(),
            data: image_base64.clone(),
            prompt: texture_prompt.clone(),
        },
    };
    let textures_json = serde_json::to_string(&textures)?;

    let conn = state.db.connect()?;
    let updated = conn.execute(
        "UPDATE mods SET textures_data = ?1, texture_prompts = ?2 WHERE id = ?3",
        params![textures_json, texture_prompt, payload.mod_id],
    )?;
    if updated == 0 {
        return Err(ApiError::NotFound(payload.mod_id));
    }

    info!(
        "stored texture for mod {} ({} image bytes)",
        payload.mod_id,
        image_bytes.len()
    );

    Ok(ok_json(json!({
        "mod_id": payload.mod_id,
        "texture_url": image_url,
        "texture_data": image_base64,
        "message": "Texture generated successfully",
    })))
}

fn build_texture_prompt(description: &str) -> String {
    format!(
        "Create a Minecraft-style 16x16 pixel texture for a mod item or block.\n\
         Style: Pixel art, Minecraft aesthetic, vibrant colors, simple geometric shapes.\n\
         Item description: {description}\n\
         \n\
         Requirements:\n\
         - 16x16 pixels resolution\n\
         - Pixel art style matching Minecraft\n\
         - Clear, recognizable icon\n\
         - No text or labels\n\
         - Suitable for game inventory icon"
    )
}
