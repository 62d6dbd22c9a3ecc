use regex::Regex;
use std::sync::LazyLock;

/// Everything that is neither a lowercase ASCII letter, a digit nor ASCII
/// whitespace.
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\t\n\x0C\r ]+").expect("strip pattern is valid"));

/// Lowercases `raw` and removes every character outside `[a-z0-9]` and ASCII
/// whitespace, keeping the relative order of what remains.
///
/// The output is pure ASCII, so byte offsets into it are character offsets.
///
/// ```rust
/// use text_search::normalize;
///
/// assert_eq!(normalize("Yo, Robot!\n¿Qué?"), "yo robot\nqu");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    STRIP.replace_all(&lower, "").into_owned()
}

/// Splits `text` on whitespace and normalizes each token, dropping tokens
/// that end up empty.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty())
}
