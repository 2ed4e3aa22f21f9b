// crates/hdrcase-core/src/file.rs
//
// Whole-file rewrite. The file is read completely before anything is written,
// so an interrupted run leaves either the original or the full result.

use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::normalize::{Normalizer, TextOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileReport {
    pub lines: usize,
    pub changed: usize,
}

/// Normalize `path` in place, writing every changed line to `diag`.
///
/// The file is always written back once the read succeeds, so an unwritable
/// target fails even when it is already normalized.
pub fn normalize_file<W: Write>(
    path: impl AsRef<Path>,
    normalizer: &Normalizer,
    diag: &mut W,
) -> Result<FileReport> {
    let path = path.as_ref();
    let outcome = run(path, normalizer, diag)?;

    std::fs::write(path, outcome.text.as_bytes())?;
    debug!(path = %path.display(), bytes = outcome.text.len(), "rewrote file");

    Ok(report(&outcome))
}

/// Same as [`normalize_file`] but never writes `path`.
pub fn check_file<W: Write>(
    path: impl AsRef<Path>,
    normalizer: &Normalizer,
    diag: &mut W,
) -> Result<FileReport> {
    let outcome = run(path.as_ref(), normalizer, diag)?;
    Ok(report(&outcome))
}

fn run<W: Write>(path: &Path, normalizer: &Normalizer, diag: &mut W) -> Result<TextOutcome> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), mode = %normalizer.mode, "read file");

    let outcome = normalizer.normalize_text(&text);
    for changed in &outcome.changed_lines {
        writeln!(diag, "{}", changed.text)?;
    }
    diag.flush()?;

    Ok(outcome)
}

fn report(outcome: &TextOutcome) -> FileReport {
    FileReport {
        lines: outcome.lines,
        changed: outcome.changed_lines.len(),
    }
}
