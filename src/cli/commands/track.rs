//! Track command handler: interactive progress session
//!
//! Reads gestures as line commands from stdin and forwards them to the
//! progress tracker. The session state lives only in memory; quitting
//! discards it. `export` writes a Markdown snapshot of the live state.

use malla_tracker::config::Config;
use malla_tracker::core::models::{Course, Curriculum};
use malla_tracker::core::progress::ProgressTracker;
use malla_tracker::core::report::{
    render_course_detail, render_grid, status_label, SnapshotContext,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the interactive tracking session
pub fn run(input_file: &Path, config: &Config) {
    let Some(curriculum) = super::load_or_report(input_file, config) else {
        return;
    };
    let mut tracker = ProgressTracker::new(&curriculum);

    print!(
        "{}",
        render_grid(&SnapshotContext::new(&curriculum, &tracker))
    );
    println!("\nType 'help' for the command list. Progress lasts only for this session.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("malla> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => print!(
                "{}",
                render_grid(&SnapshotContext::new(&curriculum, &tracker))
            ),
            "credits" => println!(
                "Credits in progress: {:.1}",
                tracker.credits_in_progress()
            ),
            "info" => {
                if let Some(course) = lookup(&curriculum, arg) {
                    print!("{}", render_course_detail(course));
                }
            }
            "take" => handle_take(&curriculum, &mut tracker, arg),
            "start" => handle_start(&curriculum, &mut tracker, arg),
            "sem" => handle_semester(&curriculum, &mut tracker, arg),
            "export" => {
                let ctx = SnapshotContext::new(&curriculum, &tracker);
                match super::export::write_snapshot(&ctx, arg.map(Path::new), input_file, config) {
                    Ok(path) => println!("✓ Snapshot exported to: {}", path.display()),
                    Err(e) => println!("{e}"),
                }
            }
            other => println!("✗ Unknown command '{other}'. Type 'help' for the list."),
        }
    }
}

/// Primary gesture: toggle completion of a course.
///
/// Mirrors the grid surface's clickable rule: a completed course can always
/// be un-taken; anything else must be unlocked and not blocked on an
/// in-progress prerequisite. The tracker re-checks regardless.
fn handle_take(curriculum: &Curriculum, tracker: &mut ProgressTracker, arg: Option<&str>) {
    let Some(course) = lookup(curriculum, arg) else {
        return;
    };

    let clickable = tracker.is_completed(&course.code)
        || (tracker.is_unlocked(course) && !tracker.is_blocked_by_in_progress(course));

    if !clickable {
        if tracker.is_blocked_by_in_progress(course) {
            println!("✗ {}: a prerequisite is still in progress", course.code);
        } else {
            println!(
                "✗ {} is locked; complete its prerequisites first",
                course.code
            );
        }
        return;
    }

    tracker.toggle_completion(course);
    report_course(tracker, course);
}

/// Secondary gesture: toggle the in-progress mark of a course.
///
/// Forwarded when the course is eligible, or already in progress (so a mark
/// stranded by a cascading un-completion can still be cleared).
fn handle_start(curriculum: &Curriculum, tracker: &mut ProgressTracker, arg: Option<&str>) {
    let Some(course) = lookup(curriculum, arg) else {
        return;
    };

    if tracker.is_in_progress(&course.code) || tracker.is_eligible_for_course_toggle(course) {
        tracker.toggle_in_progress(course);
        report_course(tracker, course);
    } else if tracker.is_completed(&course.code) {
        println!("✗ {} is already completed", course.code);
    } else if tracker.is_blocked_by_in_progress(course) {
        println!("✗ {}: a prerequisite is still in progress", course.code);
    } else {
        println!(
            "✗ {} is locked; complete its prerequisites first",
            course.code
        );
    }
}

/// Semester button: toggle a whole semester by its continuous position.
/// Only enabled when every course in the semester is unlocked.
fn handle_semester(curriculum: &Curriculum, tracker: &mut ProgressTracker, arg: Option<&str>) {
    let Some(arg) = arg else {
        println!("Usage: sem <N>");
        return;
    };
    let Ok(position) = arg.parse::<usize>() else {
        println!("✗ '{arg}' is not a semester number");
        return;
    };
    let Some(semester) = curriculum.semester_at(position) else {
        println!("✗ No semester {position} in '{}'", curriculum.name);
        return;
    };

    if !tracker.is_semester_fully_unlocked(&semester.courses) {
        println!("✗ Semester {position} still has locked courses; it cannot be toggled yet");
        return;
    }

    tracker.toggle_semester(&semester.courses);
    if tracker.is_semester_completed(&semester.courses) {
        println!("✓ Semester {position} completed");
    } else {
        println!("✓ Semester {position} un-completed");
    }
}

/// Resolve a course code argument, reporting usage or lookup failures
fn lookup<'a>(curriculum: &'a Curriculum, arg: Option<&str>) -> Option<&'a Course> {
    let Some(code) = arg else {
        println!("Usage: <command> <CODE>");
        return None;
    };

    let found = curriculum.get_course(code);
    if found.is_none() {
        println!("✗ Course '{code}' not found");
    }
    found
}

/// Print the course's new status and the in-progress credit load
fn report_course(tracker: &ProgressTracker, course: &Course) {
    println!(
        "✓ {} — {} (credits in progress: {:.1})",
        course.code,
        status_label(tracker.status_of(course)),
        tracker.credits_in_progress(),
    );
}

/// Print the command list
fn print_help() {
    println!("Commands:");
    println!("  show           redraw the curriculum grid");
    println!("  take CODE      complete a course, or un-complete it (cascades to dependents)");
    println!("  start CODE     mark a course in progress, or clear the mark");
    println!("  sem N          complete/un-complete semester N (continuous numbering)");
    println!("  info CODE      show the course detail card");
    println!("  credits        show the in-progress credit load");
    println!("  export [PATH]  write a Markdown snapshot of the current state");
    println!("  quit           end the session (progress is discarded)");
}
