//! # Code Generation Service
//!
//! `POST /api/mods/generate` turns a natural-language feature request into a
//! Forge mod main class and records it as a new row in the `mods` table.
//!
//! ## Workflow
//!
//! 1. **Dispatch**: `process` answers `OPTIONS` preflights and rejects any
//!    verb other than `POST` before reading the body.
//! 2. **Validation**: the payload is decoded into a `GenerateModRequest`
//!    (missing fields take their defaults); an empty `prompt` is a 400.
//! 3. **Generation**: a system instruction is composed from the mod name and
//!    target game version, and sent with the user prompt to the chat
//!    completion backend.
//! 4. **Persistence**: a fresh `mod_...` identifier is minted and one row is
//!    inserted with status `code_generated`. The `description` column starts
//!    out mirroring the prompt; texture generation later overwrites nothing
//!    but the texture columns.
//! 5. **Response**: the identifier, echoed name, status, full generated
//!    source, and version are returned as JSON.

use crate::error::ApiError;
use crate::services::{ok_json, parse_body, preflight};
use crate::state::AppState;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Resource};
use chrono::Utc;
use common::model::mod_record::STATUS_CODE_GENERATED;
use common::requests::GenerateModRequest;
use log::info;
use rusqlite::params;
use serde_json::json;

const API_PATH: &str = "/api/mods/generate";
const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Configures the code generation route. Every verb lands in `process`,
/// which dispatches on the method itself.
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

    let payload: GenerateModRequest = parse_body(&body)?;
    generate_mod(&state, payload).await
}

async fn generate_mod(
    state: &AppState,
    payload: GenerateModRequest,
) -> Result<HttpResponse, ApiError> {
    if payload.prompt.is_empty() {
        return Err(ApiError::Validation("Prompt is required".to_string()));
    }

    let system_prompt = build_system_prompt(&payload.mod_name, &payload.minecraft_version);
    let user_prompt = format!(
        "Create a Minecraft mod with the following features:\n{}",
        payload.prompt
    );
    let generated_code = state
        .generator
        .generate_code(&system_prompt, &user_prompt)
        .await?;

    let mod_id = state.ids.next_id();
    let created_at = Utc::now().to_rfc3339();

    let conn = state.db.connect()?;
    conn.execute(
        "INSERT INTO mods (id, name, description, prompt, minecraft_version, status, generated_code, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            mod_id,
            payload.mod_name,
            payload.prompt,
            payload.prompt,
            payload.minecraft_version,
            STATUS_CODE_GENERATED,
            generated_code,
            created_at
        ],
    )?;

    info!("generated mod {} for '{}'", mod_id, payload.mod_name);

    Ok(ok_json(json!({
        "mod_id": mod_id,
        "name": payload.mod_name,
        "status": STATUS_CODE_GENERATED,
        "code": generated_code,
        "minecraft_version": payload.minecraft_version,
    })))
}

/// Lower-cased, underscore-joined form used in the Java package name.
fn package_name(mod_name: &str) -> String {
    mod_name.to_lowercase().replace(' ', "_").replace('-', "_")
}

/// Space- and hyphen-stripped form used for the main class name.
fn class_name(mod_name: &str) -> String {
    mod_name.replace(' ', "").replace('-', "")
}

fn build_system_prompt(mod_name: &str, minecraft_version: &str) -> String {
    format!(
        "You are an expert Minecraft mod developer. Generate complete, production-ready Forge mod code for Minecraft {version}.\n\
         \n\
         CRITICAL RULES:\n\
         1. Generate ONLY the main mod class in Java\n\
         2. Use proper Forge modding structure with @Mod annotation\n\
         3. Include proper imports and package declaration\n\
         4. Make the code compilable and functional\n\
         5. Add detailed comments explaining the code\n\
         6. Use proper Minecraft/Forge APIs for the requested version\n\
         7. Include texture references and resource locations for custom items/blocks\n\
         \n\
         Package should be: com.generated.{package}\n\
         Main class should be: {class}Mod\n\
         \n\
         Generate fully working code that can be compiled into a JAR file.\n\
         Make sure to reference textures in assets folder following Minecraft conventions.",
        version = minecraft_version,
        package = package_name(mod_name),
        class = class_name(mod_name),
    )
}
