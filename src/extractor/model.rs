use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use url::Url;

use crate::extractor::reject::MIN_NEWS_WORDS;
use crate::preprocessing::combine_title_content;

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Title and body pulled out of a fetched page. Transient: it is combined
/// into a single string and dropped once the request is answered.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedArticle {
    pub url: Url,
    pub title: String,
    pub body: String,
    /// ISO 639-3 code, when detection was confident.
    pub language: Option<&'static str>,
    pub fetched_at: DateTime<Utc>,
}

impl ExtractedArticle {
    /// `"<title> <body>"`, trimmed.
    pub fn combined(&self) -> String {
        combine_title_content(&self.title, &self.body)
    }

    /// Cheap plausibility hint: real articles rarely have fewer than
    /// `MIN_NEWS_WORDS` words. Only used for logging.
    pub fn looks_like_news(&self) -> bool {
        self.combined().split_whitespace().count() >= MIN_NEWS_WORDS
    }
}

/// Raw output of the readability pass, before any validation.
#[derive(Debug)]
pub struct ReaderOutput {
    pub title: String,
    pub text: String,
}

pub fn normalize_whitespace(text: &str) -> String {
    let spaced = SPACE_RUN.replace_all(text.trim(), " ");
    BLANK_LINES.replace_all(&spaced, "\n\n").to_string()
}
