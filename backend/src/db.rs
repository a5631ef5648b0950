//! SQLite access for the `mods` table.

use rusqlite::Connection;

/// Connection factory handed to every handler through the app state.
///
/// Each invocation opens a fresh connection and drops it when done, the same
/// lifecycle the handlers would have as independently deployed function
/// instances. This struct is the single place to change if a pooled setup is
/// ever wanted; the handlers only see `connect()`.
#[derive(Debug, Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Database {
        Database { path: path.into() }
    }

    /// Open a fresh connection to the mods database.
    pub fn connect(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.path)
    }
}

/// Create the `mods` table on a fresh database file. Safe to call on every
/// startup.
pub fn init_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS mods (
            id                TEXT PRIMARY KEY,
            name              TEXT NOT NULL,
            description       TEXT,
            prompt            TEXT NOT NULL,
            minecraft_version TEXT NOT NULL,
            status            TEXT NOT NULL,
            generated_code    TEXT,
            textures_data     TEXT,
            texture_prompts   TEXT,
            version           TEXT,
            file_url          TEXT,
            created_at        TEXT NOT NULL
        );",
    )
}
