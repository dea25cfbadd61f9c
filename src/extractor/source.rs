use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::extractor::{
    errors::ExtractionError, extract, language, model::ExtractedArticle, reject,
};
use crate::fetcher::Fetcher;

/// Where URL-mode requests get their article text from.
///
/// Implementations fail closed: any problem is reported as an empty string,
/// never as an error, so the caller only has to decide what "nothing" means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSource {
    async fn extract_text(&self, url: &str) -> String;
}

/// Fetches a page over HTTP and pulls out its title and body.
#[derive(Clone, Debug)]
pub struct ContentExtractor {
    fetcher: Fetcher,
    min_length: usize,
}

impl ContentExtractor {
    pub fn new(fetcher: Fetcher, min_length: usize) -> Self {
        Self {
            fetcher,
            min_length,
        }
    }

    /// Like [`ArticleSource::extract_text`] but keeps the failure reason.
    #[instrument(skip(self))]
    pub async fn try_extract(&self, url: &str) -> Result<ExtractedArticle, ExtractionError> {
        let response = self.fetcher.fetch(url).await?;

        // HTML parsing is CPU bound; keep it off the async workers.
        let article = tokio::task::spawn_blocking(move || extract(&response))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
            .ok_or(ExtractionError::NoContent)?;

        let combined = article.combined();
        let length = combined.chars().count();
        if reject::too_short(&combined, self.min_length) {
            return Err(ExtractionError::TooShort {
                length,
                minimum: self.min_length,
            });
        }

        if let Some(code) = article.language
            && !language::is_english(code)
        {
            warn!(language = code, "article does not look like English");
        }
        if !article.looks_like_news() {
            warn!(chars = length, "extracted text is unusually short for a news article");
        }

        info!(
            final_url = %article.url,
            chars = length,
            language = article.language.unwrap_or("unknown"),
            "article extracted"
        );
        Ok(article)
    }
}

#[async_trait]
impl ArticleSource for ContentExtractor {
    async fn extract_text(&self, url: &str) -> String {
        match self.try_extract(url).await {
            Ok(article) => article.combined(),
            Err(err) => {
                warn!(url, cause = err.cause(), error = %err, "article extraction failed");
                String::new()
            }
        }
    }
}
