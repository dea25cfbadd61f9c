use std::borrow::Cow;

pub const FAKE_NEWS: &str = "Fake News";
pub const REAL_NEWS: &str = "Real News";

/// Human label for a class code. Codes outside the table pass through as
/// their decimal form.
pub fn label_for(code: i64) -> Cow<'static, str> {
    match code {
        0 => Cow::Borrowed(FAKE_NEWS),
        1 => Cow::Borrowed(REAL_NEWS),
        other => Cow::Owned(other.to_string()),
    }
}

/// Highest class probability as a percentage with two decimals, clamped to
/// `[0, 100]`. Zero when there are no probabilities.
pub fn confidence_percent(probabilities: &[f64]) -> f64 {
    let best = probabilities
        .iter()
        .copied()
        .filter(|p| p.is_finite())
        .fold(0.0_f64, f64::max);
    let percent = (best * 100.0 * 100.0).round() / 100.0;
    percent.clamp(0.0, 100.0)
}
