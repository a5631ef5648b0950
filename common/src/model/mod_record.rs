use serde::{Deserialize, Serialize};

/// Status label written when a mod row is first created. Later pipeline
/// stages (packaging, publishing) would write their own labels; nothing in
/// this system enforces an ordering between them.
pub const STATUS_CODE_GENERATED: &str = "code_generated";

/// Listing projection of a mod row, with the column names clients expect.
///
/// `timestamp` carries the stored `created_at` text verbatim, or null when
/// the row predates the column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub minecraft_version: String,
    pub status: String,
    pub file_url: Option<String>,
    pub timestamp: Option<String>,
}
