use serde::{Deserialize, Serialize};

/// A memory-board entry: a photo plus caption attributed to a contributor,
/// optionally filed under a [`MemoryCategory`](crate::model::category::MemoryCategory)
/// and a department.
///
/// The category fields are denormalized by the upstream serializer (id plus
/// name/icon/color copies) so the frontend can render a badge without a
/// second lookup. All of them are `null` for uncategorized memories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    /// Display title. Blank titles are dropped during normalization.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_icon: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
    #[serde(default)]
    pub memory_type: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_program: Option<String>,
    #[serde(default)]
    pub author_year: Option<String>,
}
