/// Word count below which extracted text is flagged as unlikely to be a
/// news article.
pub const MIN_NEWS_WORDS: usize = 50;

/// True when the combined title + body is shorter than `min_length`
/// characters.
pub fn too_short(combined: &str, min_length: usize) -> bool {
    combined.trim().chars().count() < min_length
}
