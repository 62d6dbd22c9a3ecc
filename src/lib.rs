#[allow(unused_macros)]
#[cfg(test)]
macro_rules! trace {
    ($($arg:tt)*) => { println!($($arg)*); };
}
#[allow(unused_macros)]
#[cfg(not(test))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

mod builder;
mod completions;
mod error;
mod index;
pub mod matcher;
mod normalize;
mod structs;

pub use builder::{LexiconBuilder, build_lexicon};
pub use completions::{Completions, FuzzyCompletions};
pub use error::{Error, Result};
pub use index::{TextIndex, TextIndexBuilder};
pub use matcher::{search, search_non_overlapping};
pub use normalize::{normalize, tokens};
pub use structs::*;

/// Prefix trie engine
impl Lexicon {
    /// Follows `prefix` from the root, returning the node it spells.
    #[inline]
    fn find(&self, prefix: &str) -> Option<NodeIndex> {
        prefix.chars().try_fold(structs::ROOT, |node, ch| {
            self.nodes[node].transitions.get(&ch).copied()
        })
    }

    /// Rebuilds the string spelled by the path from the root to `node`.
    pub(crate) fn word_at(&self, mut node: NodeIndex) -> String {
        let mut chars = Vec::new();
        while let Some(ch) = self.nodes[node].ch {
            chars.push(ch);
            node = self.nodes[node].parent;
        }
        chars.iter().rev().collect()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Number of trie nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if `word` was inserted as a whole word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].is_word)
    }

    /// `true` if some word starts with `prefix`. The empty prefix always
    /// matches.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Every word in lexicographic order.
    pub fn words(&self) -> Completions<'_> {
        Completions::new(self, Some(structs::ROOT))
    }

    /// Lazily yields the words starting with `prefix`, in lexicographic
    /// order. Nothing is yielded when no word has that prefix.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        Completions::new(self, self.find(prefix))
    }

    /// Lazily yields distinct words reachable from `prefix` within
    /// `max_edits` insertions and deletions, in traversal order.
    pub fn fuzzy_completions(&self, prefix: &str, max_edits: NumEdits) -> FuzzyCompletions<'_> {
        FuzzyCompletions::new(self, prefix, max_edits)
    }

    /// Up to `limit` words starting with `prefix`, in lexicographic order.
    ///
    /// ```rust
    /// use text_search::LexiconBuilder;
    ///
    /// let lexicon = LexiconBuilder::new().build(["a", "ab", "abc", "abd"]);
    ///
    /// assert_eq!(lexicon.suggest_exact("a", 2), vec!["a", "ab"]);
    /// assert!(lexicon.suggest_exact("z", 2).is_empty());
    /// ```
    #[must_use]
    pub fn suggest_exact(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        self.completions(prefix).take(limit).collect()
    }

    /// Up to `limit` words within `max_edits` of `prefix`, sorted.
    ///
    /// An insertion or a deletion costs one edit; replacing a character costs
    /// two.
    ///
    /// ```rust
    /// use text_search::LexiconBuilder;
    ///
    /// let lexicon = LexiconBuilder::new().build(["cat"]);
    ///
    /// assert_eq!(lexicon.suggest_fuzzy("kat", 10, 2), vec!["cat"]);
    /// assert!(lexicon.suggest_fuzzy("kat", 10, 1).is_empty());
    /// ```
    #[must_use]
    pub fn suggest_fuzzy(&self, prefix: &str, limit: usize, max_edits: NumEdits) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let mut words: Vec<String> = self.fuzzy_completions(prefix, max_edits).take(limit).collect();
        words.sort_unstable();
        words
    }

    /// Exact completion when `max_edits` is zero, fuzzy otherwise.
    ///
    /// Falling back from one mode to the other is left to the caller, see
    /// [`TextIndex::suggest`].
    #[must_use]
    pub fn suggest(&self, prefix: &str, limit: usize, max_edits: NumEdits) -> Vec<String> {
        if max_edits == 0 {
            self.suggest_exact(prefix, limit)
        } else {
            self.suggest_fuzzy(prefix, limit, max_edits)
        }
    }
}
