mod config;
mod db;
mod error;
mod generation;
mod ids;
mod services;
mod state;

use crate::config::AppConfig;
use crate::db::Database;
use crate::generation::OpenAiClient;
use crate::ids::RequestStampedIds;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;

fn startup_error(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> io::Error {
    io::Error::other(err)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(startup_error)?;

    let database = Database::new(&config.database_path);
    {
        let conn = database.connect().map_err(startup_error)?;
        db::init_schema(&conn).map_err(startup_error)?;
    }

    let generator = OpenAiClient::new(
        config.api_key.clone(),
        config.api_base.clone(),
        config.request_timeout,
    )
    .map_err(startup_error)?;

    let state = web::Data::new(AppState {
        db: database,
        generator: Arc::new(generator),
        ids: Arc::new(RequestStampedIds),
    });

    info!("Server running at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(services::generate_mod::configure_routes())
            .service(services::generate_textures::configure_routes())
            .service(services::list_mods::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
