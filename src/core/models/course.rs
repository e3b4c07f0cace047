//! Course model

use serde::{Deserialize, Serialize};

/// Represents a single course in a curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within the curriculum (e.g., "INF1201")
    pub code: String,

    /// Course display name (e.g., "Data Structures")
    pub name: String,

    /// Credit weight (non-negative, can be fractional)
    pub credits: f32,

    /// Prerequisites - stored as course codes (may be empty)
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Free-text course description
    #[serde(default)]
    pub description: String,

    /// Area tag (e.g., "Mathematics", "Computing")
    #[serde(default)]
    pub area: String,
}

impl Course {
    /// Create a new course with no prerequisites
    ///
    /// # Arguments
    /// * `code` - Unique course code
    /// * `name` - Course display name
    /// * `credits` - Credit weight (can be fractional)
    #[must_use]
    pub const fn new(code: String, name: String, credits: f32) -> Self {
        Self {
            code,
            name,
            credits,
            prerequisites: Vec::new(),
            description: String::new(),
            area: String::new(),
        }
    }

    /// Add a prerequisite by course code
    pub fn add_prerequisite(&mut self, prereq_code: String) {
        if !self.prerequisites.contains(&prereq_code) {
            self.prerequisites.push(prereq_code);
        }
    }

    /// Whether the course has no prerequisites
    #[must_use]
    pub fn has_no_prerequisites(&self) -> bool {
        self.prerequisites.is_empty()
    }
}
