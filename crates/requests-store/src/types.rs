//! Row types for the `requests` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Table holding verification-code requests.
pub const REQUESTS_TABLE: &str = "requests";

/// Status every request is created with.
pub const REGISTERED: &str = "registered";

/// A persisted verification-code request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Store-assigned identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Digits-only mobile number
    pub mobile: String,

    /// Upper-cased lookup code (e.g. "ABC123")
    pub code: String,

    /// Free-form processing status, "registered" on creation
    pub status: String,

    /// Opaque payload attached by later processing
    #[serde(default)]
    pub payload: Option<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert body for a new request.
///
/// The store assigns `id`; everything else is fixed at creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewRequest {
    pub mobile: String,
    pub code: String,
    pub status: String,
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl NewRequest {
    /// Build a freshly registered request, canonicalizing mobile and code.
    pub fn new(mobile: &str, code: &str) -> Self {
        Self {
            mobile: mobile.chars().filter(|c| c.is_ascii_digit()).collect(),
            code: code.to_uppercase(),
            status: REGISTERED.to_string(),
            payload: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Patch body for a status transition.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl StatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            updated_at: Utc::now(),
        }
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Ids may come back as integers (bigserial) or strings (uuid).
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
