// crates/xpdsc-rs/src/normalize.rs

//! Text cleanup applied to descriptions and file paths.

/// Trims a description and converts Windows line endings to `\n`.
///
/// An absent or empty description yields `None`, so the field is omitted.
pub fn filter_description(text: Option<&str>) -> Option<String> {
    match text {
        Some(t) if !t.is_empty() => Some(t.trim().replace("\r\n", "\n")),
        _ => None,
    }
}

/// Converts backslash path separators to forward slashes.
pub fn filter_path(path: &str) -> String {
    path.replace('\\', "/")
}
