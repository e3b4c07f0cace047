//! Show command handler

use malla_tracker::config::Config;
use malla_tracker::core::progress::ProgressTracker;
use malla_tracker::core::report::{render_course_detail, render_grid, SnapshotContext};
use std::path::Path;

/// Run the show command: render the curriculum grid, or a single course's
/// detail card when `course` is given.
pub fn run(input_file: &Path, course: Option<&str>, config: &Config) {
    let Some(curriculum) = super::load_or_report(input_file, config) else {
        return;
    };

    if let Some(code) = course {
        match curriculum.get_course(code) {
            Some(c) => print!("{}", render_course_detail(c)),
            None => eprintln!("✗ Course '{code}' not found in '{}'", curriculum.name),
        }
        return;
    }

    let tracker = ProgressTracker::new(&curriculum);
    let ctx = SnapshotContext::new(&curriculum, &tracker);
    print!("{}", render_grid(&ctx));
}
