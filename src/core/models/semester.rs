//! Semester model

use super::Course;
use serde::{Deserialize, Serialize};

/// Represents one semester of a curriculum: the source-assigned semester
/// number plus its ordered course list.
///
/// The number is the index assigned by the source document (restarting per
/// year in some catalogs); the continuous 1-based position across the whole
/// curriculum is derived when the curriculum is flattened, not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Source-assigned semester number
    pub number: u32,

    /// Ordered courses taught in this semester
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create a new empty semester
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self {
            number,
            courses: Vec::new(),
        }
    }

    /// Add a course to the semester
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Look up a course in this semester by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Total credit weight of all courses in the semester
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Number of courses in the semester
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }
}
