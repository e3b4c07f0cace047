//! Export command handler

use logger::{error, info};
use malla_tracker::config::Config;
use malla_tracker::core::progress::ProgressTracker;
use malla_tracker::core::report::{MarkdownSnapshot, SnapshotContext};
use std::path::{Path, PathBuf};

/// Run the export command: write a Markdown snapshot of a freshly loaded
/// curriculum (no progress marked).
pub fn run(input_file: &Path, output: Option<&Path>, config: &Config) {
    let Some(curriculum) = super::load_or_report(input_file, config) else {
        return;
    };

    let tracker = ProgressTracker::new(&curriculum);
    let ctx = SnapshotContext::new(&curriculum, &tracker);

    match write_snapshot(&ctx, output, input_file, config) {
        Ok(path) => println!("✓ Snapshot exported to: {}", path.display()),
        Err(e) => eprintln!("{e}"),
    }
}

/// Write a snapshot of the given context.
///
/// When no explicit output path is given, the file lands in the configured
/// reports directory as `<input stem>_snapshot.md`.
///
/// # Errors
/// Returns a user-facing message when the reports directory cannot be
/// created or the snapshot cannot be written.
pub fn write_snapshot(
    ctx: &SnapshotContext,
    output: Option<&Path>,
    input_file: &Path,
    config: &Config,
) -> Result<PathBuf, String> {
    let final_output_path: PathBuf = if let Some(output) = output {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("curriculum")
            .to_string();
        reports_dir.join(format!("{filename}_snapshot.md"))
    };

    MarkdownSnapshot::new()
        .generate(ctx, &final_output_path)
        .map_err(|e| {
            error!(
                "Snapshot export failed for {}: {e}",
                final_output_path.display()
            );
            format!(
                "✗ Failed to write snapshot to {}: {e}",
                final_output_path.display()
            )
        })?;

    info!("Snapshot written to: {}", final_output_path.display());
    Ok(final_output_path)
}
