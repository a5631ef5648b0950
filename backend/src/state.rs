//! Shared per-process state injected into every handler.

use crate::db::Database;
use crate::generation::GenerationBackend;
use crate::ids::ModIdGenerator;
use std::sync::Arc;

/// Built once in `main.rs` and handed to actix as `web::Data<AppState>`.
pub struct AppState {
    /// Connection factory for the mods table.
    pub db: Database,
    /// Upstream text/image generation boundary.
    pub generator: Arc<dyn GenerationBackend>,
    /// Mint for new mod identifiers.
    pub ids: Arc<dyn ModIdGenerator>,
}
