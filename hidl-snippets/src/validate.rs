//! Validation of section and snippet names.

use miette::SourceSpan;

/// Find the span of a section or snippet name in the TOML source.
/// Searches for `[name]`, `name =` and quoted keys, in that order.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("[{}]", name), 1),
        (format!("\"{}\"", name), 1),
        (format!("\n{} =", name), 1),
        (format!("\n{}=", name), 1),
    ];

    for (pattern, offset) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + offset, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Validate a snippet or section name.
/// Returns None if valid, Some(reason) if invalid.
///
/// Snippet names are composed at lookup time from a prefix and a type
/// suffix, so they are restricted to letters, digits and underscores.
/// Section names may additionally contain dashes.
pub(crate) fn validate_name(name: &str, allow_dash: bool) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || (allow_dash && c == '-') {
            continue;
        }
        return Some(if allow_dash {
            "name must contain only letters, numbers, underscores, and dashes"
        } else {
            "name must contain only letters, numbers, and underscores"
        });
    }

    None
}
