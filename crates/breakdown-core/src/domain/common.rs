//! Path text helpers.
//!
//! Resolved paths are handed to other tools and printed, so they are kept as
//! `/`-separated strings regardless of the host platform instead of going
//! through `PathBuf`. Everything here is pure string manipulation; nothing
//! touches the filesystem.

/// Marker meaning "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// `true` for `/...`, `\...` and drive-letter paths (`C:...`).
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || has_drive_prefix(path)
}

/// `true` if the path contains a separator of either flavour.
pub fn has_hierarchy(path: &str) -> bool {
    path.contains('/') || path.contains('\\')
}

/// `true` if the path explicitly names a directory (`out/`, `out\`).
pub fn ends_with_separator(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}

/// `true` if the last segment has a non-leading dot.
pub fn has_extension(path: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    matches!(name.rfind('.'), Some(idx) if idx > 0 && idx < name.len() - 1)
}

/// Join segments with `/` and normalize the result.
///
/// Empty segments are skipped, so an unset adaptation or a blank base
/// directory never introduces a `//`.
pub fn join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

/// Normalize separators to `/` and fold `.`, `..` and repeated separators.
///
/// A leading `/` or drive prefix is preserved. `..` that would climb above a
/// relative path's start is kept; above an absolute root it is dropped. The
/// result is never empty.
pub fn normalize(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let (root, rest) = split_root(&unified);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if root.is_empty() => segments.push(".."),
                _ => {}
            },
            other => segments.push(other),
        }
    }

    let body = segments.join("/");
    if root.is_empty() && body.is_empty() {
        ".".to_string()
    } else {
        format!("{root}{body}")
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn split_root(path: &str) -> (&str, &str) {
    if path.starts_with('/') {
        return path.split_at(1);
    }
    if has_drive_prefix(path) {
        let split = if path[2..].starts_with('/') { 3 } else { 2 };
        return path.split_at(split);
    }
    ("", path)
}
