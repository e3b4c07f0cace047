//! Markdown snapshot generator
//!
//! Writes the current grid and progress state as a Markdown document that
//! renders well in GitHub, GitLab, and VS Code. Uses template substitution
//! over an embedded template.

use crate::core::report::{semester_tag, status_label, SnapshotContext};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown snapshot template
const SNAPSHOT_TEMPLATE: &str = include_str!("templates/snapshot.md");

/// Markdown snapshot generator
pub struct MarkdownSnapshot;

impl MarkdownSnapshot {
    /// Create a new Markdown snapshot generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the snapshot using template substitution
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn render(&self, ctx: &SnapshotContext) -> String {
        let mut output = SNAPSHOT_TEMPLATE.to_string();

        output = output.replace("{{curriculum_name}}", &ctx.curriculum.name);
        output = output.replace(
            "{{total_credits}}",
            &format!("{:.1}", ctx.curriculum.total_credits()),
        );
        output = output.replace(
            "{{completed_credits}}",
            &format!("{:.1}", ctx.tracker.credits_completed()),
        );
        output = output.replace(
            "{{credits_in_progress}}",
            &format!("{:.1}", ctx.tracker.credits_in_progress()),
        );
        output = output.replace("{{semester_sections}}", &Self::semester_sections(ctx));

        output
    }

    /// Render the snapshot and write it to a file
    ///
    /// # Errors
    /// Returns an error when the output file cannot be written
    pub fn generate(&self, ctx: &SnapshotContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx);
        fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate one section per semester: a header with the continuous
    /// position and state tag, then a course table
    fn semester_sections(ctx: &SnapshotContext) -> String {
        let mut sections = String::new();

        for (position, semester) in ctx.curriculum.continuous_semesters() {
            let _ = writeln!(
                sections,
                "## Semester {position} ({:.1} cr, {})\n",
                semester.total_credits(),
                semester_tag(ctx.tracker, &semester.courses),
            );

            sections.push_str("| Status | Code | Course | Credits |\n");
            sections.push_str("|---|---|---|---|\n");

            for course in &semester.courses {
                let status = ctx.tracker.status_of(course);
                let _ = writeln!(
                    sections,
                    "| {} | {} | {} | {:.1} |",
                    status_label(status),
                    course.code,
                    course.name,
                    course.credits,
                );
            }

            sections.push('\n');
        }

        // Drop the trailing blank line so the template spacing stays tight
        while sections.ends_with('\n') {
            sections.pop();
        }
        sections
    }
}

impl Default for MarkdownSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
