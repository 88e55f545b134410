//! Request and response data models.
//!
//! The GraphQL response is deserialized into a typed nested shape rather than
//! navigated by string paths: a payload that is valid JSON but does not match
//! this shape fails deserialization and is classified as non-data upstream,
//! instead of silently producing nulls.

use serde::Deserialize;

/// One search invocation's input, constructed once and never mutated.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Professor name to search for (non-empty).
    pub query: String,
    /// Relay-style school identifier, or `None` to search all schools.
    pub school_relay_id: Option<String>,
}

impl SearchRequest {
    /// Builds a request from a name and an optional pre-encoded school id.
    pub fn new(query: impl Into<String>, school_relay_id: Option<String>) -> Self {
        Self {
            query: query.into(),
            school_relay_id,
        }
    }
}

/// School attached to a teacher record. All fields are server-optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    /// Relay identifier of the school.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy numeric id.
    #[serde(default)]
    pub legacy_id: Option<i64>,
}

/// One professor record as returned by the search endpoint.
///
/// Only `id` is guaranteed present; every other field may be absent or null
/// depending on how much data the site holds for the professor.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    /// Relay identifier of the teacher.
    pub id: String,
    /// Legacy numeric id.
    #[serde(default)]
    pub legacy_id: Option<i64>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// School the record belongs to.
    #[serde(default)]
    pub school: Option<SchoolRecord>,
    /// Average rating, 1.0 to 5.0.
    #[serde(default)]
    pub avg_rating: Option<f64>,
    /// Average difficulty, 1.0 to 5.0.
    #[serde(default)]
    pub avg_difficulty: Option<f64>,
    /// Number of ratings behind the averages.
    #[serde(default)]
    pub num_ratings: Option<i64>,
    /// Percentage of raters who would take the professor again.
    #[serde(default)]
    pub would_take_again_percent: Option<f64>,
}

impl TeacherRecord {
    /// Full display name; falls back to whichever part is present.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => "(unnamed)".to_string(),
        }
    }
}

// Typed deserialization target for the full response envelope. Every layer
// down to `edges` is required: a response missing any of them is malformed
// for our purposes and must fail parsing.

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub data: SearchData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchData {
    pub new_search: NewSearch,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewSearch {
    pub teachers: TeacherConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeacherConnection {
    pub edges: Vec<TeacherEdge>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeacherEdge {
    #[serde(default)]
    pub node: Option<TeacherRecord>,
}

impl SearchResponse {
    /// Flattens the envelope into records, preserving server order.
    /// Edges without a node are skipped.
    pub(crate) fn into_records(self) -> Vec<TeacherRecord> {
        self.data
            .new_search
            .teachers
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .collect()
    }
}
