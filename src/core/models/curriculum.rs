//! Curriculum model

use super::{Course, Dag, Semester};
use serde::{Deserialize, Serialize};

/// One year-group of a curriculum: an ordered run of semesters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Ordered semesters taught in this year
    pub semesters: Vec<Semester>,
}

/// Represents a full curriculum ("malla curricular"): a display name and an
/// ordered sequence of year-groups.
///
/// Flattening all years' semesters in order yields the canonical semester
/// sequence used everywhere else; each flattened semester carries a derived
/// continuous 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Curriculum display name (e.g., "Ingeniería en Informática")
    pub name: String,

    /// Ordered year-groups
    pub years: Vec<YearGroup>,
}

impl Curriculum {
    /// Create a new empty curriculum
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            years: Vec::new(),
        }
    }

    /// Iterate over all semesters in canonical (flattened) order
    pub fn semesters(&self) -> impl Iterator<Item = &Semester> {
        self.years.iter().flat_map(|year| year.semesters.iter())
    }

    /// All semesters paired with their derived continuous position (1-based,
    /// counted across year boundaries)
    #[must_use]
    pub fn continuous_semesters(&self) -> Vec<(usize, &Semester)> {
        self.semesters()
            .enumerate()
            .map(|(idx, sem)| (idx + 1, sem))
            .collect()
    }

    /// Get a semester by its continuous 1-based position
    #[must_use]
    pub fn semester_at(&self, position: usize) -> Option<&Semester> {
        if position == 0 {
            return None;
        }
        self.semesters().nth(position - 1)
    }

    /// Iterate over every course in the curriculum, in semester order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters().flat_map(|sem| sem.courses.iter())
    }

    /// Look up a course anywhere in the curriculum by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses().find(|c| c.code == code)
    }

    /// Total number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses().count()
    }

    /// Total number of semesters across all years
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.semesters().count()
    }

    /// Total credit weight of the whole curriculum
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.courses().map(|c| c.credits).sum()
    }

    /// Build the prerequisite DAG over all courses in the curriculum
    ///
    /// Every course becomes a vertex even when it has no prerequisite edges.
    /// Prerequisite codes that reference courses outside the document still
    /// become vertices; the loader treats the document as-is and the
    /// progress rules simply never unlock through a course that cannot be
    /// completed.
    #[must_use]
    pub fn build_dag(&self) -> Dag {
        let mut dag = Dag::new();

        for course in self.courses() {
            dag.add_course(course.code.clone());
            for prereq in &course.prerequisites {
                dag.add_prerequisite(course.code.clone(), prereq);
            }
        }

        dag
    }
}
