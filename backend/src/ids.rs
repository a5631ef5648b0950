//! Mod identifier generation.

use chrono::Utc;
use uuid::Uuid;

/// Mints identifiers for newly generated mods.
pub trait ModIdGenerator: Send + Sync {
    /// Produce the next identifier. Ids are never reused once handed out.
    fn next_id(&self) -> String;
}

/// Production generator: a UTC second-precision stamp plus the first 8 hex
/// characters of a fresh per-request UUID, e.g.
/// `mod_20240131_092415_3fa85f64`. Collisions require two requests in the
/// same second drawing the same 32-bit prefix.
pub struct RequestStampedIds;

impl ModIdGenerator for RequestStampedIds {
    fn next_id(&self) -> String {
        let stamp = Utc::now().format("%Y%m%d_%H%M%S");
        let request_id = Uuid::new_v4().simple().to_string();
        format!("mod_{}_{}", stamp, &request_id[..8])
    }
}
