const SUFFIX: &str = "_Resume.pdf";
const FALLBACK: &str = "Resume.pdf";

/// Characters that cannot appear in a filename on common platforms.
fn is_forbidden(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Derives the artifact filename from the subject's name.
///
/// Whitespace runs collapse to a single `_`, as do path separators and
/// other characters filenames cannot hold, so the result never leaves the
/// output directory. A missing or blank name gives `Resume.pdf`.
pub fn export_filename(name: Option<&str>) -> String {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return FALLBACK.to_string();
    };
    let stem: String = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let stem = stem.trim_start_matches('.');
    if stem.is_empty() {
        return FALLBACK.to_string();
    }
    format!("{}{}", stem, SUFFIX)
}
