use std::collections::BTreeMap;
use std::fmt;

pub type NumEdits = usize;
pub type NodeIndex = usize;

/// Index of the root node inside every [`Lexicon`] arena.
pub(crate) const ROOT: NodeIndex = 0;

/// A single node inside the lexicon trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// Outgoing edges keyed by the next character, kept in ascending order.
    pub(crate) transitions: BTreeMap<char, NodeIndex>,
    /// The path from the root to this node spells a vocabulary word.
    pub(crate) is_word: bool,
    /// Index of the parent node; the root points at itself.
    pub(crate) parent: NodeIndex,
    /// Character that leads from `parent` to this node, `None` for the root.
    pub(crate) ch: Option<char>,
}

impl Node {
    /// Helper used by the builder to create a brand‑new node.
    pub(crate) fn new(parent: NodeIndex, ch: Option<char>) -> Node {
        Self {
            transitions: BTreeMap::new(),
            is_word: false,
            parent,
            ch,
        }
    }
}

/// Immutable prefix tree built by [`LexiconBuilder`](crate::LexiconBuilder).
///
/// Nodes live in a flat arena and reference their children by index, so a
/// built lexicon can be shared between threads and queried without locking.
#[derive(Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub(crate) nodes: Vec<Node>,
    pub(crate) num_words: usize,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("words", &self.num_words)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// A single match of a pattern inside the normalized text of a
/// [`TextIndex`](crate::TextIndex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Inclusive start byte index.
    pub start: usize,
    /// Exclusive end byte index.
    pub end: usize,
    /// Window of normalized text surrounding the match.
    pub context: &'a str,
}

/// Result returned by [`TextIndex::suggest`](crate::TextIndex::suggest).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestions {
    pub words: Vec<String>,
    /// `true` when the words come from the fuzzy fallback.
    pub fuzzy: bool,
    pub elapsed: std::time::Duration,
}

/// Running totals over every suggestion query served by one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuggestStats {
    pub count: u64,
    pub total: std::time::Duration,
}

impl SuggestStats {
    /// Mean time spent per query, zero when nothing has been served yet.
    #[must_use]
    pub fn average(&self) -> std::time::Duration {
        if self.count == 0 {
            return std::time::Duration::ZERO;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        std::time::Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}
