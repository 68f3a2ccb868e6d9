//! Title-to-slug normalization.
//!
//! Produces the base slug only. Collision handling (the `-1`, `-2`, …
//! suffix walk against active siblings) lives in the repository layer,
//! which owns the uniqueness queries; [`with_suffix`] builds each
//! candidate so both sides agree on the format.

/// Fallback slug for titles that normalize to nothing (e.g. `"!!!"`).
const EMPTY_TITLE_SLUG: &str = "untitled";

/// Normalize a human-readable title to a URL-safe slug.
///
/// Lowercases, keeps ASCII alphanumerics, and collapses every run of
/// other characters into a single hyphen. Leading/trailing hyphens are
/// trimmed.
///
/// # Examples
///
/// ```
/// use lifeboard_core::slug::slugify;
///
/// assert_eq!(slugify("Trading Journal"), "trading-journal");
/// assert_eq!(slugify("  Week 1 -- Notes!  "), "week-1-notes");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return EMPTY_TITLE_SLUG.to_string();
    }
    slug
}

/// Build the `counter`-th collision candidate for a base slug.
pub fn with_suffix(base: &str, counter: u32) -> String {
    format!("{base}-{counter}")
}
