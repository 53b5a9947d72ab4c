//! Lookup endpoint DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::credentials::Credentials;
use crate::domain::job::Job;

/// Protocol version marker the lookup endpoint expects
pub const LOOKUP_PROTOCOL_VERSION: &str = "2";

/// Form body sent to the lookup endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    pub username: String,
    pub password: String,
    pub version: String,
}

impl LookupRequest {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            version: LOOKUP_PROTOCOL_VERSION.to_string(),
        }
    }
}

/// JSON body returned by the lookup endpoint
///
/// `ids` and `data` are parallel arrays: `ids[i]` belongs to `data[i]`.
/// Either may be missing or `null`, which counts as empty. `pass` and
/// `version` are echoed by the print server for diagnostics only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub ids: Option<Vec<JsonValue>>,
    #[serde(default)]
    pub data: Option<Vec<JsonValue>>,
    #[serde(default)]
    pub pass: Option<JsonValue>,
    #[serde(default)]
    pub version: Option<JsonValue>,
}

impl LookupResponse {
    /// Number of job ids in the response
    pub fn id_count(&self) -> usize {
        self.ids.as_ref().map_or(0, Vec::len)
    }

    /// Number of job payloads in the response
    pub fn data_count(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Whether every id has a payload and vice versa
    pub fn is_paired(&self) -> bool {
        self.id_count() == self.data_count()
    }

    /// Number of jobs `into_jobs` will yield
    pub fn job_count(&self) -> usize {
        self.id_count().min(self.data_count())
    }

    /// Pairs ids with payloads by position
    ///
    /// Entries past the end of the shorter array are dropped. Callers that
    /// care should check [`is_paired`](Self::is_paired) first.
    pub fn into_jobs(self) -> impl Iterator<Item = Job> {
        let ids = self.ids.unwrap_or_default();
        let data = self.data.unwrap_or_default();

        ids.into_iter()
            .zip(data)
            .map(|(id, data)| Job::new(opaque_text(id), opaque_text(data)))
    }
}

/// Renders an opaque JSON value as text
///
/// Strings are taken verbatim; anything else is rendered as its JSON text,
/// so `42` becomes `"42"`, `true` becomes `"true"` and `null` becomes
/// `"null"`. Such entries are still paired and reported, never skipped, so
/// the print server sees the id back in its own JSON spelling.
fn opaque_text(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        other => other.to_string(),
    }
}
