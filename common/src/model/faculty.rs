use serde::{Deserialize, Serialize};

/// A tribute to a faculty member, either curated upstream or submitted
/// through the tribute-wall form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacultyTribute {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub years_of_service: Option<i32>,
    #[serde(default)]
    pub specialization: Option<String>,
}
