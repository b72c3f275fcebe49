//! Text normalization and chunking
//!
//! Provides the cleanup pipeline and greedy sentence packing that turn a raw
//! message body into bounded-length vault chunks.

use regex::Regex;

use crate::error::Result;

/// Default upper bound on chunk length, in characters.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1000;

/// Normalizes message text and packs it into bounded-length chunks.
///
/// Normalization is lossy: non-ASCII characters are dropped outright and
/// URLs are removed without a replacement space, so two words separated only
/// by a URL end up concatenated. Both behaviors are deliberate.
pub struct TextChunker {
    max_chunk_chars: usize,
    quote_runs: Regex,
    dash_runs: Regex,
    underscore_runs: Regex,
    space_runs: Regex,
    urls: Regex,
    whitespace: Regex,
    sentence_boundary: Regex,
}

impl TextChunker {
    /// Create a chunker with the given maximum chunk length
    pub fn new(max_chunk_chars: usize) -> Result<Self> {
        Ok(Self {
            max_chunk_chars,
            quote_runs: Regex::new(r"\s*(?:>\s*){2,}")?,
            dash_runs: Regex::new(r"-{3,}")?,
            underscore_runs: Regex::new(r"_{3,}")?,
            space_runs: Regex::new(r"\s{2,}")?,
            urls: Regex::new(r"https?://\S+|www\.\S+")?,
            whitespace: Regex::new(r"\s+")?,
            sentence_boundary: Regex::new(r"[.!?] +")?,
        })
    }

    /// Clean up raw message text.
    ///
    /// Rules, applied in order: drop non-ASCII characters, collapse nested
    /// reply quoting (runs of `>`), collapse `---`/`___` separators, collapse
    /// whitespace runs, remove URLs, then collapse whitespace again and trim.
    /// Idempotent on its own output; never fails.
    pub fn normalize(&self, text: &str) -> String {
        let ascii: String = text.chars().filter(|c| c.is_ascii()).collect();

        let cleaned = self.quote_runs.replace_all(&ascii, " ");
        let cleaned = self.dash_runs.replace_all(&cleaned, " ");
        let cleaned = self.underscore_runs.replace_all(&cleaned, " ");
        let cleaned = self.space_runs.replace_all(&cleaned, " ");
        let cleaned = self.urls.replace_all(&cleaned, "");
        let cleaned = self.whitespace.replace_all(&cleaned, " ");

        cleaned.trim().to_string()
    }

    /// Split normalized text into sentence-like units.
    ///
    /// The boundary rule is "after `.`, `!` or `?` followed by spaces"; the
    /// punctuation stays with the preceding sentence and the spaces are
    /// consumed. This is a heuristic: abbreviations and decimal numbers
    /// produce false splits.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.sentence_boundary.find_iter(text) {
            // Keep the punctuation character, drop the trailing spaces
            let split_at = boundary.start() + 1;
            sentences.push(&text[start..split_at]);
            start = boundary.end();
        }
        sentences.push(&text[start..]);

        sentences
    }

    /// Normalize `text` and pack its sentences into chunks.
    ///
    /// Sentences are packed greedily in order; a chunk is emitted when the
    /// next sentence would push it past the maximum. A single sentence longer
    /// than the maximum becomes its own oversized chunk rather than being
    /// split or truncated. Empty input yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in self.split_sentences(&normalized) {
            if current.len() + sentence.len() + 1 < self.max_chunk_chars {
                current.push_str(sentence);
                current.push(' ');
            } else {
                if !current.is_empty() {
                    chunks.push(current.trim_end().to_string());
                    current.clear();
                }
                current.push_str(sentence);
                current.push(' ');
            }
        }

        if !current.trim_end().is_empty() {
            chunks.push(current.trim_end().to_string());
        }

        chunks
    }
}
