use readability::extractor;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::extractor::model::ReaderOutput;

/// Containers tried, in order, when readability gives up.
const CONTENT_SELECTORS: [&str; 10] = [
    "article",
    "[itemprop='articleBody']",
    "main",
    "[role='main']",
    ".article-body",
    ".article",
    ".entry-content",
    ".post",
    "#content",
    ".content",
];

/// Minimum text a container must hold before it is accepted as the body.
const MIN_CONTAINER_TEXT: usize = 100;

pub fn extract(html: &str, url: &Url) -> Option<ReaderOutput> {
    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url)
        && !article.text.trim().is_empty()
    {
        let title = if article.title.trim().is_empty() {
            extract_title(&Html::parse_document(html)).unwrap_or_default()
        } else {
            article.title
        };
        return Some(ReaderOutput {
            title,
            text: article.text,
        });
    }

    fallback_extract(html)
}

fn fallback_extract(html: &str) -> Option<ReaderOutput> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_default();
    let text = extract_main_text(&document);

    if title.is_empty() && text.trim().is_empty() {
        return None;
    }

    Some(ReaderOutput { title, text })
}

fn extract_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        let og_title = document
            .select(&selector)
            .filter_map(|element| element.value().attr("content"))
            .map(str::trim)
            .find(|content| !content.is_empty());
        if let Some(content) = og_title {
            return Some(content.to_string());
        }
    }

    ["title", "h1"].into_iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        document
            .select(&selector)
            .map(|element| collect_text(&element).trim().to_string())
            .find(|title| !title.is_empty())
    })
}

fn extract_main_text(document: &Html) -> String {
    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let text = paragraph_text(&element);
                if text.trim().len() > MIN_CONTAINER_TEXT {
                    return text;
                }
            }
        }
    }

    // Last resort: every paragraph in the body
    if let Ok(body_selector) = Selector::parse("body")
        && let Some(body) = document.select(&body_selector).next()
    {
        let text = paragraph_text(&body);
        if !text.trim().is_empty() {
            return text;
        }
        return collect_text(&body);
    }

    String::new()
}

/// Paragraph texts of `element` separated by blank lines, or its whole text
/// when it has no `<p>` children.
fn paragraph_text(element: &ElementRef) -> String {
    let Ok(p_selector) = Selector::parse("p") else {
        return collect_text(element);
    };

    let paragraphs: Vec<String> = element
        .select(&p_selector)
        .map(|p| collect_text(&p).trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        collect_text(element)
    } else {
        paragraphs.join("\n\n")
    }
}

fn collect_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
