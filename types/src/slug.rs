use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derives a URL slug from a title or name: lowercase, every whitespace run
/// collapsed into one hyphen. Punctuation is kept and uniqueness is not
/// checked, so two titles can share a slug.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}
