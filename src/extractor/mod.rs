pub mod errors;
pub mod language;
pub mod model;
pub mod reader;
pub mod reject;
pub mod source;

#[cfg(test)]
mod tests;

pub use errors::ExtractionError;
pub use model::ExtractedArticle;
pub use source::{ArticleSource, ContentExtractor};

use crate::fetcher::types::PageResponse;

/// Best-effort title + body for a fetched page. `None` when the page has
/// neither.
pub fn extract(resp: &PageResponse) -> Option<ExtractedArticle> {
    let result = reader::extract(&resp.body_utf8, &resp.url_final)?;

    let title = model::normalize_whitespace(&result.title);
    let body = model::normalize_whitespace(&result.text);
    if title.is_empty() && body.is_empty() {
        return None;
    }

    let language = language::detect_language(&body);

    Some(ExtractedArticle {
        url: resp.url_final.clone(),
        title,
        body,
        language,
        fetched_at: resp.fetched_at,
    })
}
