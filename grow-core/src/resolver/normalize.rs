//! Slug normalization transforms

use std::sync::LazyLock;

use regex::Regex;

static REPEATED_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("literal pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("literal pattern"));

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("literal pattern"));

/// Collapse runs of dashes into one: `los-angeles--to--dallas` becomes
/// `los-angeles-to-dallas`.
pub fn normalize_dashes(slug: &str) -> String {
    REPEATED_DASHES.replace_all(slug, "-").into_owned()
}

/// Slug derived from a human-readable name: lower-cased, whitespace runs
/// become dashes, anything outside `[a-z0-9-]` is dropped, then dashes are
/// collapsed.
///
/// `"Los Angeles to Dallas"` becomes `los-angeles-to-dallas`;
/// `"Dallas to Atlanta (Inbound)"` becomes `dallas-to-atlanta-inbound`.
pub fn display_name_slug(display_name: &str) -> String {
    let lowered = display_name.to_lowercase();
    let dashed = WHITESPACE.replace_all(&lowered, "-");
    let stripped = NON_SLUG_CHARS.replace_all(&dashed, "");
    normalize_dashes(&stripped)
}

/// Path segment as typed into the areas-we-serve route: lower-cased with
/// whitespace runs turned into dashes. No other characters are touched.
pub fn area_segment(segment: &str) -> String {
    WHITESPACE
        .replace_all(segment.trim(), "-")
        .to_lowercase()
}
