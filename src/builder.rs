use crate::normalize::tokens;
use crate::structs::ROOT;
use crate::{Lexicon, Node};

/// Builder for [`Lexicon`].
///
/// ```rust
/// use text_search::LexiconBuilder;
///
/// let lexicon = LexiconBuilder::new().build(["cat", "car", "dog"]);
///
/// assert_eq!(lexicon.suggest_exact("ca", 10), vec!["car", "cat"]);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    normalize: bool,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Start with the defaults: tokens taken from text are normalized.
    #[must_use]
    pub fn new() -> Self {
        Self { normalize: true }
    }

    /// Run [`normalize`](crate::normalize()) over every token split out by
    /// [`build_from_text`](Self::build_from_text).
    ///
    /// Words handed to [`build`](Self::build) are always inserted verbatim.
    #[must_use]
    pub fn normalize(mut self, value: bool) -> Self {
        self.normalize = value;
        self
    }

    /// Builds an immutable [`Lexicon`] from a list of words.
    ///
    /// Empty words are skipped and duplicates are inserted once.
    pub fn build<I, S>(self, words: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon {
            nodes: vec![Node::new(ROOT, None)],
            num_words: 0,
        };
        for word in words {
            Self::insert(&mut lexicon, word.as_ref());
        }
        tracing::debug!(
            words = lexicon.num_words,
            nodes = lexicon.nodes.len(),
            "lexicon built"
        );
        lexicon
    }

    /// Builds the vocabulary of `text`: it is split on whitespace and, unless
    /// disabled, every token is normalized before insertion.
    ///
    /// ```rust
    /// use text_search::LexiconBuilder;
    ///
    /// let lexicon = LexiconBuilder::new().build_from_text("The robot, the ROBOTS!");
    ///
    /// assert_eq!(lexicon.words().collect::<Vec<_>>(), vec!["robot", "robots", "the"]);
    /// ```
    pub fn build_from_text(self, text: &str) -> Lexicon {
        if self.normalize {
            self.build(tokens(text))
        } else {
            self.build(text.split_whitespace())
        }
    }

    fn insert(lexicon: &mut Lexicon, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut current = ROOT;
        for ch in word.chars() {
            let new_index = lexicon.nodes.len();
            current = match lexicon.nodes[current].transitions.get(&ch) {
                Some(&next) => next,
                None => {
                    lexicon.nodes[current].transitions.insert(ch, new_index);
                    lexicon.nodes.push(Node::new(current, Some(ch)));
                    new_index
                }
            };
        }
        if !lexicon.nodes[current].is_word {
            lexicon.nodes[current].is_word = true;
            lexicon.num_words += 1;
        }
    }
}

/// Shortcut for `LexiconBuilder::new().build_from_text(normalized_text)`.
#[must_use]
pub fn build_lexicon(normalized_text: &str) -> Lexicon {
    LexiconBuilder::new().build_from_text(normalized_text)
}
