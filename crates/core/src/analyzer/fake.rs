use super::lexicon::CLICKBAIT_PATTERNS;

const SUSPICIOUS_PATTERN_COUNT: usize = 3;

/// Number of distinct clickbait patterns present in `title`.
pub fn clickbait_hits(title: &str) -> usize {
    let title = title.to_lowercase();
    CLICKBAIT_PATTERNS
        .iter()
        .filter(|pattern| title.contains(*pattern))
        .count()
}

pub fn is_suspicious(title: &str) -> bool {
    clickbait_hits(title) >= SUSPICIOUS_PATTERN_COUNT
}
