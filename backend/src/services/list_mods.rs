//! Mod listing endpoint: the 50 most recent rows, newest first.

use crate::error::ApiError;
use crate::services::{ok_json, preflight};
use crate::state::AppState;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Resource};
use common::model::mod_record::ModSummary;
use rusqlite::params;
use serde_json::json;

const API_PATH: &str = "/api/mods";
const ALLOWED_METHODS: &str = "GET, OPTIONS";
const LIST_LIMIT: i64 = 50;

pub fn configure_routes() -> Resource {
    web::resource(API_PATH).route(web::route().to(process))
}

pub(crate) async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(preflight(ALLOWED_METHODS));
    }
    if req.method() != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    list_mods(&state).await
}

async fn list_mods(state: &AppState) -> Result<HttpResponse, ApiError> {
    let conn = state.db.connect()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, description, version, minecraft_version, status, file_url, created_at
         FROM mods
         ORDER BY created_at DESC
         LIMIT ?1",
    )?;
    let mods = stmt
        .query_map(params![LIST_LIMIT], |row| {
            Ok(ModSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                version: row.get(3)?,
                minecraft_version: row.get(4)?,
                status: row.get(5)?,
                file_url: row.get(6)?,
                timestamp: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<ModSummary>, _>>()?;

    Ok(ok_json(json!({ "mods": mods })))
}
