//! Slug and tag-string normalization.
//!
//! # Responsibility
//! - Turn free text into a canonical lowercase, delimiter-joined slug.
//! - Split comma-separated tag input into clean tag names.
//!
//! # Invariants
//! - Slugs contain no character from the punctuation class below.
//! - Normalization is deterministic; non-ASCII passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"[\t !"#$%&'()*\-/<=>?@\[\\\]^_`{|},.]+"##).expect("valid punctuation regex")
});

/// Generates a URL-safe slug joined with `-`.
pub fn slugify(text: &str) -> String {
    slugify_with(text, "-")
}

/// Generates a URL-safe slug joined with the given delimiter.
///
/// Lower-cases the input, splits on runs of punctuation/whitespace and
/// drops the empty segments the split leaves behind. Empty input yields
/// an empty string.
pub fn slugify_with(text: &str, delimiter: &str) -> String {
    let lowered = text.to_lowercase();
    PUNCT_RE
        .split(&lowered)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Splits a comma-separated tag string into trimmed names.
///
/// Blank entries are dropped; duplicates keep their submission order.
/// Empty input yields an empty list.
pub fn parse_tag_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
