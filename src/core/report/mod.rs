//! Rendering of a curriculum grid with progress state
//!
//! Produces the terminal view used by the `show` and `track` commands and
//! hosts the Markdown snapshot exporter. Renderers are pure readers: they
//! consume the curriculum plus the tracker's derived queries and never touch
//! tracker state.

pub mod markdown;

pub use markdown::MarkdownSnapshot;

use crate::core::models::{Course, Curriculum};
use crate::core::progress::{CourseStatus, ProgressTracker};
use std::fmt::Write;

/// Data context for rendering a progress snapshot
#[derive(Debug, Clone, Copy)]
pub struct SnapshotContext<'a> {
    /// The loaded curriculum
    pub curriculum: &'a Curriculum,
    /// Current session progress
    pub tracker: &'a ProgressTracker,
}

impl<'a> SnapshotContext<'a> {
    /// Create a new snapshot context
    #[must_use]
    pub const fn new(curriculum: &'a Curriculum, tracker: &'a ProgressTracker) -> Self {
        Self {
            curriculum,
            tracker,
        }
    }
}

/// Short status marker for the terminal grid
#[must_use]
pub const fn status_marker(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Completed => "[x]",
        CourseStatus::InProgress => "[~]",
        CourseStatus::Blocked => "[!]",
        CourseStatus::Unlocked => "[ ]",
        CourseStatus::Locked => "[-]",
    }
}

/// Human-readable status label
#[must_use]
pub const fn status_label(status: CourseStatus) -> &'static str {
    match status {
        CourseStatus::Completed => "Completed",
        CourseStatus::InProgress => "In progress",
        CourseStatus::Blocked => "Blocked",
        CourseStatus::Unlocked => "Available",
        CourseStatus::Locked => "Locked",
    }
}

/// Label shown next to a semester header, mirroring the semester button
/// contract: the button is enabled only when the whole semester is unlocked,
/// and reads "completed" once its unlocked subset is fully done.
pub(crate) fn semester_tag(tracker: &ProgressTracker, courses: &[Course]) -> &'static str {
    if !tracker.is_semester_fully_unlocked(courses) {
        "locked"
    } else if tracker.is_semester_completed(courses) {
        "completed"
    } else {
        "open"
    }
}

/// Render the whole curriculum as a text grid, one semester block per
/// continuous position, with per-course status markers and credit totals.
#[must_use]
pub fn render_grid(ctx: &SnapshotContext) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", ctx.curriculum.name);
    let _ = writeln!(out, "{}", "=".repeat(ctx.curriculum.name.chars().count()));

    for (position, semester) in ctx.curriculum.continuous_semesters() {
        let _ = writeln!(
            out,
            "\nSemester {position} ({:.1} cr) [{}]",
            semester.total_credits(),
            semester_tag(ctx.tracker, &semester.courses),
        );

        for course in &semester.courses {
            let status = ctx.tracker.status_of(course);
            let _ = writeln!(
                out,
                "  {} {:<10} {:<40} {:>5.1} cr",
                status_marker(status),
                course.code,
                course.name,
                course.credits,
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Completed: {:.1}/{:.1} cr    In progress: {:.1} cr",
        ctx.tracker.credits_completed(),
        ctx.curriculum.total_credits(),
        ctx.tracker.credits_in_progress(),
    );

    out
}

/// Render the detail card for a single course: code, credits, area,
/// description and the prerequisite list (or "none").
#[must_use]
pub fn render_course_detail(course: &Course) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} — {}", course.code, course.name);
    let _ = writeln!(out, "  Credits:       {:.1}", course.credits);
    if !course.area.is_empty() {
        let _ = writeln!(out, "  Area:          {}", course.area);
    }
    if !course.description.is_empty() {
        let _ = writeln!(out, "  Description:   {}", course.description);
    }
    let prereqs = if course.prerequisites.is_empty() {
        "none".to_string()
    } else {
        course.prerequisites.join(", ")
    };
    let _ = writeln!(out, "  Prerequisites: {prereqs}");

    out
}
