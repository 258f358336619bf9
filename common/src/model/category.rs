use serde::{Deserialize, Serialize};

/// A grouping bucket for memory-board entries.
///
/// `order` defines the total order used when rendering grouped galleries;
/// `is_active` hides retired categories without deleting the memories filed
/// under them (those fall into the unassigned bucket instead).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryCategory {
    pub id: i64,
    pub name: String,
    /// Symbolic token rendered next to the name, an emoji in practice.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Hex color string ("#8B5CF6") used for the category's panels and badges.
    #[serde(default)]
    pub color: String,
    /// Sort key; ties are broken by name.
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub memory_count: i64,
}
