use bytes::Bytes;
use chrono::Utc;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fs;
use url::Url;

use crate::extractor::{extract, reject};
use crate::fetcher::types::{Charset, PageResponse};

#[test]
fn test_extract_news_article() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://ledger.example.com/politics/budget");
    let article = extract(&response).expect("article should be extracted");

    assert!(article.title.contains("Parliament Approves Revised Budget"));
    assert!(article.body.contains("Lawmakers approved the revised national budget"));
    assert!(article.body.contains("upper chamber"));
    assert!(!article.body.contains("window.analytics"));
    assert_eq!(article.language, Some("eng"));

    let combined = article.combined();
    assert!(combined.starts_with(&article.title));
    assert!(!reject::too_short(&combined, 50));
    assert!(article.looks_like_news());
}

#[test]
fn test_empty_page_has_no_usable_content() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/empty.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/empty");
    let usable = extract(&response)
        .map(|article| !reject::too_short(&article.combined(), 50))
        .unwrap_or(false);

    assert!(!usable);
}

#[test]
fn test_minimal_valid_content() {
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Valid Article</title></head><body><article><h1>Valid Article</h1><p>{}</p></article></body></html>"#,
        "This is a valid article with enough content to pass the minimum requirements, so it is kept. ".repeat(20)
    );

    let response = create_test_response(html, "https://example.com/valid");
    let article = extract(&response).expect("article should be extracted");

    assert_eq!(article.title, "Valid Article");
    assert!(article.body.len() > 250);
}

#[test]
fn test_malformed_html() {
    let html =
        "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content".to_string();

    let response = create_test_response(html, "https://example.com/broken");

    // Must not panic; whatever comes back keeps the title
    if let Some(article) = extract(&response) {
        assert_eq!(article.title, "Broken");
    }
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body_raw: Bytes::from(html.clone()),
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}
