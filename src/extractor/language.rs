use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

/// ISO 639-3 code of the dominant language, or `None` when the text is too
/// short or detection is not confident.
pub fn detect_language(text: &str) -> Option<&'static str> {
    if text.trim().len() < MIN_TEXT_LENGTH {
        return None;
    }

    detect(text)
        .filter(|info| info.confidence() >= MIN_CONFIDENCE)
        .map(|info| info.lang().code())
}

/// The bundled stopword list and vocabulary are English; anything else
/// still gets classified but deserves a log line.
pub fn is_english(code: &str) -> bool {
    code == Lang::Eng.code()
}
