use crate::structs::{NodeIndex, NumEdits};
use crate::Lexicon;
use std::collections::BTreeSet;

/// Lazy depth-first walk over the words below a trie node.
///
/// Children are visited in ascending character order, so words come out in
/// lexicographic order. Dropping the iterator early prunes the rest of the
/// traversal.
#[derive(Debug, Clone)]
pub struct Completions<'a> {
    lexicon: &'a Lexicon,
    stack: Vec<NodeIndex>,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(lexicon: &'a Lexicon, start: Option<NodeIndex>) -> Self {
        Self {
            lexicon,
            stack: start.into_iter().collect(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(node) = self.stack.pop() {
            let current = &self.lexicon.nodes[node];
            self.stack.extend(current.transitions.values().rev());
            if current.is_word {
                return Some(self.lexicon.word_at(node));
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy)]
struct FuzzyState {
    node: NodeIndex,
    /// Number of query characters already accounted for.
    consumed: usize,
    edits_left: NumEdits,
}

/// Lazy edit-bounded walk of the trie jointly with a query prefix.
///
/// Extra characters in the candidate word (insertions) and extra characters
/// in the query (deletions) cost one edit each; a substituted character is an
/// insertion plus a deletion. A word is yielded once the whole query has been
/// accounted for exactly at its node, and every node is yielded at most once.
/// The order follows the traversal, not the alphabet.
#[derive(Debug, Clone)]
pub struct FuzzyCompletions<'a> {
    lexicon: &'a Lexicon,
    query: Vec<char>,
    stack: Vec<FuzzyState>,
    emitted: BTreeSet<NodeIndex>,
}

impl<'a> FuzzyCompletions<'a> {
    pub(crate) fn new(lexicon: &'a Lexicon, query: &str, max_edits: NumEdits) -> Self {
        Self {
            lexicon,
            query: query.chars().collect(),
            stack: vec![FuzzyState {
                node: crate::structs::ROOT,
                consumed: 0,
                edits_left: max_edits,
            }],
            emitted: BTreeSet::new(),
        }
    }
}

impl Iterator for FuzzyCompletions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(FuzzyState {
            node,
            consumed,
            edits_left,
        }) = self.stack.pop()
        {
            let current = &self.lexicon.nodes[node];
            let Some(&wanted) = self.query.get(consumed) else {
                if current.is_word && self.emitted.insert(node) {
                    trace!("  accept  node={node} edits_left={edits_left}");
                    return Some(self.lexicon.word_at(node));
                }
                continue;
            };

            // Pushed first so it is explored after every child.
            if edits_left > 0 {
                trace!("  delete  {wanted:?} at node={node}");
                self.stack.push(FuzzyState {
                    node,
                    consumed: consumed + 1,
                    edits_left: edits_left - 1,
                });
            }

            for (&ch, &child) in current.transitions.iter().rev() {
                if ch == wanted {
                    trace!("  match   {ch:?} -> node={child}");
                    self.stack.push(FuzzyState {
                        node: child,
                        consumed: consumed + 1,
                        edits_left,
                    });
                } else if edits_left > 0 {
                    trace!("  insert  {ch:?} -> node={child}");
                    self.stack.push(FuzzyState {
                        node: child,
                        consumed,
                        edits_left: edits_left - 1,
                    });
                }
            }
        }
        None
    }
}
