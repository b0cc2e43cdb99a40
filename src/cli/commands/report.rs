//! Report command handler
//!
//! Writes the owner's grade summary as a Markdown or HTML document.

use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uds_gpa::config::Config;
use uds_gpa::report::{write_report, ReportContext, ReportFormat};
use uds_gpa::store::{CourseStore, OwnerKey};

/// Run the report command.
///
/// # Arguments
/// * `store` - Course store to read from
/// * `owner` - Owner whose courses are reported
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the default reports directory
pub fn run(
    store: &impl CourseStore,
    owner: &OwnerKey,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) {
    match generate_report(store, owner, output_file, format_str, config) {
        Ok(path) => {
            info!("Report exported to: {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        Err(err) => {
            error!("Report generation failed for '{owner}': {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Default report location: `<reports_dir>/<owner>_summary.<ext>`
fn default_output_path(reports_dir: &Path, owner: &OwnerKey, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{owner}_summary.{}", format.extension()))
}

fn generate_report(
    store: &impl CourseStore,
    owner: &OwnerKey,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let courses = store
        .list(owner)
        .map_err(|e| format!("✗ Failed to load courses for '{owner}': {e}"))?;

    let output_path = output_file.map_or_else(
        || default_output_path(Path::new(&config.paths.reports_dir), owner, format),
        Path::to_path_buf,
    );

    let ctx = ReportContext::new(owner, store.scale(), &courses);
    write_report(&ctx, format, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    Ok(output_path)
}
