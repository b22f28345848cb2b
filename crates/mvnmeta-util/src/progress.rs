//! Cargo-style status lines on stderr.
//!
//! Labels are right-aligned to 12 columns so messages line up:
//!
//! ```text
//!       Merged 3 of 3 files into maven-metadata.xml
//!      Skipped broken.xml is not valid maven-metadata.xml
//! ```

use std::fmt;
use std::io::Write;

use console::Style;

const LABEL_WIDTH: usize = 12;

/// Completed action, bold green label.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Nothing happened or nothing to do, bold cyan label.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// Something was skipped or ignored, bold yellow label.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}

fn emit(style: Style, label: &str, message: &str) {
    // width applies to the label text, not its escape codes
    let line = format_line(style.apply_to(label), message);
    let _ = writeln!(std::io::stderr().lock(), "{line}");
}

fn format_line(label: impl fmt::Display, message: &str) -> String {
    format!("{label:>LABEL_WIDTH$} {message}")
}
