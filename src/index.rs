use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::structs::NumEdits;
use crate::{Lexicon, LexiconBuilder, Occurrence, SuggestStats, Suggestions, matcher};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Builder for [`TextIndex`].
///
/// ```rust
/// use text_search::TextIndexBuilder;
///
/// let index = TextIndexBuilder::new()
///     .suggest_limit(3)
///     .context_radius(4)
///     .build("I, Robot. The robots were patient.");
///
/// assert_eq!(index.search("ROBOT"), vec![2, 12]);
/// assert_eq!(index.occurrences("patient")[0].context, "ere patient");
/// ```
#[derive(Debug, Clone)]
pub struct TextIndexBuilder {
    suggest_limit: usize,
    fallback_edits: NumEdits,
    context_radius: usize,
    lexicon: LexiconBuilder,
}

impl Default for TextIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TextIndexBuilder {
    /// Ten suggestions, one fallback edit, twenty characters of context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suggest_limit: 10,
            fallback_edits: 1,
            context_radius: 20,
            lexicon: LexiconBuilder::new(),
        }
    }

    /// Maximum number of words returned by [`TextIndex::suggest`].
    #[must_use]
    pub fn suggest_limit(mut self, limit: usize) -> Self {
        self.suggest_limit = limit;
        self
    }

    /// Edit budget of the fuzzy retry; zero disables the retry.
    #[must_use]
    pub fn fallback_edits(mut self, edits: NumEdits) -> Self {
        self.fallback_edits = edits;
        self
    }

    /// Characters of context kept on each side of an occurrence.
    #[must_use]
    pub fn context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    /// Configure how the vocabulary is extracted.
    #[must_use]
    pub fn lexicon(mut self, builder: LexiconBuilder) -> Self {
        self.lexicon = builder;
        self
    }

    /// Normalizes `raw` and indexes its vocabulary.
    pub fn build(self, raw: &str) -> TextIndex {
        let text = normalize(raw);
        let lexicon = self.lexicon.build_from_text(&text);
        tracing::debug!(
            bytes = text.len(),
            words = lexicon.len(),
            "text index built"
        );
        TextIndex {
            text,
            lexicon,
            suggest_limit: self.suggest_limit,
            fallback_edits: self.fallback_edits,
            context_radius: self.context_radius,
            suggest_count: AtomicU64::new(0),
            suggest_nanos: AtomicU64::new(0),
        }
    }

    /// Reads the file at `path` and indexes it. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn build_from_path(self, path: impl AsRef<Path>) -> Result<TextIndex> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded text");
        Ok(self.build(&String::from_utf8_lossy(&bytes)))
    }
}

/// A normalized text together with its vocabulary.
///
/// Immutable after construction apart from the suggestion statistics, which
/// are atomic, so a shared reference can serve queries from many threads.
#[derive(Debug)]
pub struct TextIndex {
    text: String,
    lexicon: Lexicon,
    suggest_limit: usize,
    fallback_edits: NumEdits,
    context_radius: usize,
    suggest_count: AtomicU64,
    suggest_nanos: AtomicU64,
}

impl TextIndex {
    /// Indexes `raw` with the default configuration.
    pub fn new(raw: &str) -> Self {
        TextIndexBuilder::new().build(raw)
    }

    /// Indexes the file at `path` with the default configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        TextIndexBuilder::new().build_from_path(path)
    }

    /// The normalized text that offsets refer to.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Offsets of `pattern` in the normalized text. The pattern is normalized
    /// first; one that is blank afterwards matches nothing.
    #[must_use]
    pub fn search(&self, pattern: &str) -> Vec<usize> {
        let pattern = normalize(pattern);
        if pattern.trim().is_empty() {
            return Vec::new();
        }
        let positions = matcher::search(&pattern, &self.text);
        tracing::trace!(pattern = %pattern, matches = positions.len(), "search");
        positions
    }

    /// Like [`search`](Self::search), with a window of surrounding text for
    /// every match.
    #[must_use]
    pub fn occurrences(&self, pattern: &str) -> Vec<Occurrence<'_>> {
        let len = normalize(pattern).len();
        self.search(pattern)
            .into_iter()
            .map(|start| {
                let end = start + len;
                let from = start.saturating_sub(self.context_radius);
                let to = end.saturating_add(self.context_radius).min(self.text.len());
                Occurrence {
                    start,
                    end,
                    context: &self.text[from..to],
                }
            })
            .collect()
    }

    /// Completes `prefix` from the vocabulary.
    ///
    /// Exact completion is tried first; when it finds nothing the query is
    /// retried with the configured fuzzy edit budget. Every call is timed into
    /// [`stats`](Self::stats).
    pub fn suggest(&self, prefix: &str) -> Suggestions {
        let prefix = prefix.to_lowercase();
        if prefix.is_empty() {
            return Suggestions::default();
        }

        let started = Instant::now();
        let mut words = self.lexicon.suggest(&prefix, self.suggest_limit, 0);
        let mut fuzzy = false;
        if words.is_empty() && self.fallback_edits > 0 {
            words = self
                .lexicon
                .suggest(&prefix, self.suggest_limit, self.fallback_edits);
            fuzzy = !words.is_empty();
        }
        let elapsed = started.elapsed();

        self.suggest_count.fetch_add(1, Ordering::Relaxed);
        self.suggest_nanos.fetch_add(
            u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );
        tracing::trace!(prefix = %prefix, found = words.len(), fuzzy, ?elapsed, "suggest");

        Suggestions {
            words,
            fuzzy,
            elapsed,
        }
    }

    /// Totals over all [`suggest`](Self::suggest) calls so far.
    #[must_use]
    pub fn stats(&self) -> SuggestStats {
        SuggestStats {
            count: self.suggest_count.load(Ordering::Relaxed),
            total: Duration::from_nanos(self.suggest_nanos.load(Ordering::Relaxed)),
        }
    }
}
