//! Shared fixtures for handler tests: a temp-file database and a canned
//! generation backend, so no test leaves the process.

use crate::db::{self, Database};
use crate::generation::{GenerationBackend, UpstreamError};
use crate::ids::RequestStampedIds;
use crate::state::AppState;
use actix_web::web;
use async_trait::async_trait;
use rusqlite::params;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

pub(crate) const STUB_CODE: &str = "// generated mod source";
pub(crate) const STUB_IMAGE_URL: &str = "https://images.example/main_texture.png";
pub(crate) const STUB_IMAGE_BYTES: &[u8] = b"not-really-a-png";

/// Canned backend. Counts calls so tests can assert that wrong-verb and
/// validation failures never reach upstream.
pub(crate) struct StubGenerator {
    calls: AtomicUsize,
    fail: bool,
}

impl StubGenerator {
    pub(crate) fn ok() -> Arc<StubGenerator> {
        Arc::new(StubGenerator {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub(crate) fn failing() -> Arc<StubGenerator> {
        Arc::new(StubGenerator {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn bump(&self) -> Result<(), UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(UpstreamError::Malformed("stub failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GenerationBackend for StubGenerator {
    async fn generate_code(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, UpstreamError> {
        self.bump()?;
        Ok(STUB_CODE.to_string())
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String, UpstreamError> {
        self.bump()?;
        Ok(STUB_IMAGE_URL.to_string())
    }

    async fn download_image(&self, _url: &str) -> Result<Vec<u8>, UpstreamError> {
        self.bump()?;
        Ok(STUB_IMAGE_BYTES.to_vec())
    }
}

/// A temp database plus app state wired with the stub backend.
pub(crate) struct TestEnv {
    pub(crate) state: web::Data<AppState>,
    pub(crate) stub: Arc<StubGenerator>,
    pub(crate) db: Database,
    _dir: TempDir,
}

pub(crate) fn test_env() -> TestEnv {
    test_env_with(StubGenerator::ok())
}

pub(crate) fn test_env_with(stub: Arc<StubGenerator>) -> TestEnv {
    let dir = TempDir::new().expect("temp dir");
    let database = Database::new(dir.path().join("mods.sqlite").to_string_lossy());
    {
        let conn = database.connect().expect("open database");
        db::init_schema(&conn).expect("create schema");
    }

    let state = web::Data::new(AppState {
        db: database.clone(),
        generator: stub.clone(),
        ids: Arc::new(RequestStampedIds),
    });

    TestEnv {
        state,
        stub,
        db: database,
        _dir: dir,
    }
}

/// Insert a minimal row directly, bypassing the handlers.
pub(crate) fn insert_mod_row(db: &Database, id: &str, name: &str, created_at: &str) {
    let conn = db.connect().expect("open database");
    conn.execute(
        "INSERT INTO mods (id, name, description, prompt, minecraft_version, status, generated_code, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            name,
            "seed description",
            "seed prompt",
            "1.20.1",
            "code_generated",
            "// seed code",
            created_at
        ],
    )
    .expect("insert row");
}

pub(crate) fn count_mods(db: &Database) -> i64 {
    let conn = db.connect().expect("open database");
    conn.query_row("SELECT COUNT(*) FROM mods", [], |row| row.get(0))
        .expect("count rows")
}
