/// True when `text`, once trimmed, is non-empty and at least `min_length`
/// characters long.
pub fn is_valid_input(text: &str, min_length: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_length
}

/// `"<title> <content>"`, trimmed. Either side may be empty.
pub fn combine_title_content(title: &str, content: &str) -> String {
    format!("{} {}", title, content).trim().to_string()
}
