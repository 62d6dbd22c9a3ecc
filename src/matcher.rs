//! Exact substring search with the Knuth–Morris–Pratt automaton.
//!
//! Text and pattern are treated as sequences of code units: `&str` inputs are
//! scanned byte by byte, so every reported offset is a byte offset that lies
//! on a character boundary of the text.

/// How the scanner continues after a complete match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resume {
    /// Continue from the longest matched suffix that is also a prefix of the
    /// pattern (`lps[m - 1]`), so matches may share code units.
    #[default]
    Overlapping,
    /// Restart from the beginning of the pattern; matches never share code
    /// units.
    NonOverlapping,
}

/// Builds the failure (LPS) table of `pattern`.
///
/// Entry `i` is the length of the longest proper prefix of the pattern that is
/// also a suffix of `pattern[..=i]`.
///
/// ```rust
/// use text_search::matcher::failure_table;
///
/// assert_eq!(failure_table(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
/// ```
#[must_use]
pub fn failure_table<T: Eq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    let (mut i, mut j) = (1, 0);
    while i < m {
        if pattern[i] == pattern[j] {
            j += 1;
            lps[i] = j;
            i += 1;
        } else if j == 0 {
            lps[i] = 0;
            i += 1;
        } else {
            j = lps[j - 1];
        }
    }
    lps
}

/// Scans `text` once and returns the start offset of every match of
/// `pattern`, continuing after each match as dictated by `resume`.
#[must_use]
pub fn find_all_with<T: Eq>(pattern: &[T], text: &[T], resume: Resume) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    let mut positions = Vec::new();
    if m == 0 || n == 0 {
        return positions;
    }

    let lps = failure_table(pattern);
    let (mut i, mut j) = (0, 0);
    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == m {
                positions.push(i - j);
                j = match resume {
                    Resume::Overlapping => lps[j - 1],
                    Resume::NonOverlapping => 0,
                };
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    positions
}

/// All matches of `pattern` in `text`, overlapping ones included.
///
/// ```rust
/// use text_search::matcher::find_all;
///
/// assert_eq!(find_all(&[1, 2, 1], &[1, 2, 1, 2, 1]), vec![0, 2]);
/// ```
#[must_use]
pub fn find_all<T: Eq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    find_all_with(pattern, text, Resume::Overlapping)
}

/// Matches of `pattern` in `text` that never share a code unit, picked
/// greedily from the left.
#[must_use]
pub fn find_all_non_overlapping<T: Eq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    find_all_with(pattern, text, Resume::NonOverlapping)
}

/// Byte offsets of every occurrence of `pattern` in `text`.
///
/// An empty pattern or an empty text has no occurrences.
///
/// ```rust
/// use text_search::search;
///
/// assert_eq!(search("aa", "aaaa"), vec![0, 1, 2]);
/// assert_eq!(search("robot", "yo robot robot"), vec![3, 9]);
/// assert!(search("", "anything").is_empty());
/// ```
#[must_use]
pub fn search(pattern: &str, text: &str) -> Vec<usize> {
    find_all(pattern.as_bytes(), text.as_bytes())
}

/// Like [`search`], but a match is only reported once the previous one has
/// been fully consumed.
///
/// ```rust
/// use text_search::search_non_overlapping;
///
/// assert_eq!(search_non_overlapping("aa", "aaaa"), vec![0, 2]);
/// assert_eq!(search_non_overlapping("aa", "aaa"), vec![0]);
/// ```
#[must_use]
pub fn search_non_overlapping(pattern: &str, text: &str) -> Vec<usize> {
    find_all_non_overlapping(pattern.as_bytes(), text.as_bytes())
}
