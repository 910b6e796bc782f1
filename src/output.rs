//! CLI output formatting for batch runs.
//!
//! Each display has a `format_*` function (returns a `String` or
//! `Vec<String>`) for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure — no I/O, no side effects.
//!
//! ```text
//! [3/5] 60%
//! ...
//! Normalized 4 of 5 images
//! Failed:
//!  - shoes.png: decode failed: ...
//! ```

use crate::imaging::calculations::percent_complete;
use crate::report::BatchReport;

/// One progress line per processed item: 1-based count and floor percent.
pub fn format_progress(done: usize, total: usize) -> String {
    format!("[{done}/{total}] {}%", percent_complete(done, total))
}

pub fn print_progress(done: usize, total: usize) {
    println!("{}", format_progress(done, total));
}

/// End-of-batch summary: processed count first, then every failure with its
/// reason.
pub fn format_summary(verb: &str, noun: &str, report: &BatchReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{verb} {} of {} {noun}",
        report.succeeded, report.total
    )];
    if !report.is_clean() {
        lines.push("Failed:".to_string());
        for failure in &report.failures {
            lines.push(format!(" - {}: {}", failure.label, failure.reason));
        }
    }
    lines
}

pub fn print_summary(verb: &str, noun: &str, report: &BatchReport) {
    for line in format_summary(verb, noun, report) {
        println!("{line}");
    }
}

/// Sticker catalog listing: one name per line, flagged when the asset is
/// missing from the asset directory.
pub fn format_sticker_list(entries: &[(&str, bool)]) -> Vec<String> {
    entries
        .iter()
        .map(|&(name, resolved)| {
            if resolved {
                name.to_string()
            } else {
                format!("{name} (missing)")
            }
        })
        .collect()
}

pub fn print_sticker_list(entries: &[(&str, bool)]) {
    for line in format_sticker_list(entries) {
        println!("{line}");
    }
}
