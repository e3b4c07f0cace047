//! Data models for `malla-tracker`

pub mod course;
pub mod curriculum;
pub mod dag;
pub mod semester;

pub use course::Course;
pub use curriculum::{Curriculum, YearGroup};
pub use dag::Dag;
pub use semester::Semester;
