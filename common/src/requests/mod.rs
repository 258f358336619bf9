use serde::{Deserialize, Serialize};

/// Request payload for submitting a faculty tribute.
/// Field names match the upstream endpoint exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTribute {
    pub faculty_name: String,
    pub department: String,
    pub tribute_text: String,
    pub submitted_by: String,
}
