use serde::{Deserialize, Serialize};

/// A graduate record as served by the yearbook REST API.
///
/// The upstream serializer is loose about which fields it includes: optional
/// relations come through as `null`, and free-text fields are sometimes
/// omitted entirely. Every field that can be absent is therefore either an
/// `Option` or carries `#[serde(default)]`, so a partially populated record
/// still deserializes instead of failing the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Internal numeric id, unique within a fetched collection.
    pub id: i64,
    /// Human-facing code such as "INSA009". May be blank; the frontend
    /// synthesizes a fallback when it is.
    #[serde(default)]
    pub student_id: String,
    /// Display name. A blank name makes the record undisplayable and the
    /// frontend drops it during normalization.
    #[serde(default)]
    pub name: String,
    /// Foreign key into the department table, when assigned.
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Direct link to the rendered certificate image. When missing, the
    /// frontend derives the per-student certificate endpoint instead.
    #[serde(default)]
    pub certificate_url: Option<String>,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub last_words: String,
    #[serde(default)]
    pub highlight_tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub my_story: Option<String>,
}
