//! Helpers for sanitizing data before it reaches filenames or tracing spans.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid literal pattern"))
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_` so a job
/// identity can be embedded in an output filename.
pub fn sanitize_identity(identity: &str) -> String {
    unsafe_chars().replace_all(identity, "_").into_owned()
}

/// Returns only the filename component of a path (no directory).
///
/// Safe for span fields — reveals the file name without exposing the full path.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}
