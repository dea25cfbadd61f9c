use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::preprocessing::stopwords::Stopwords;

// `\s` here must also cover the U+001C..U+001F separators, which the
// training-side regex engine treats as whitespace and `regex` does not.
static URLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http[^\s\x1C-\x1F]+|www[^\s\x1C-\x1F]+|https[^\s\x1C-\x1F]+").unwrap()
});
static HTML_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s\x1C-\x1F]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F]+").unwrap());

/// Turns raw article text into the token string the vectorizer was fitted on.
///
/// The output must match the training-side cleaning byte for byte; a drift
/// here does not fail loudly, it just makes predictions worse. Steps, in
/// order: lowercase, drop URLs, drop tags, replace anything that is not an
/// ASCII letter or whitespace with a space, collapse whitespace, split on
/// whitespace, drop stopwords, rejoin with single spaces.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: Arc<Stopwords>,
}

impl TextNormalizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
        }
    }

    pub fn english() -> Self {
        Self::new(Stopwords::english())
    }

    /// Lowercase, alphabetic-only, single-spaced text. Stopwords untouched.
    pub fn basic_clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = text.to_lowercase();
        let text = URLS.replace_all(&text, " ");
        let text = HTML_TAGS.replace_all(&text, " ");
        let text = NON_LETTERS.replace_all(&text, " ");
        WHITESPACE.replace_all(&text, " ").trim().to_string()
    }

    pub fn remove_stopwords(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full pipeline. Empty when nothing but stopwords, digits or
    /// punctuation was supplied.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.remove_stopwords(&self.basic_clean(text))
    }

    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}
