use super::lexicon::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};
use super::{clamp_score, tier_bonus, NEUTRAL_SCORE};

const COMMENT_BONUS_TIERS: &[(u32, f64)] = &[(50, 10.0), (20, 5.0), (10, 2.0)];

/// Keyword-weighted sentiment of `text`, nudged up by comment volume.
pub fn score(text: &str, comment_count: u32) -> f64 {
    if text.is_empty() {
        return NEUTRAL_SCORE;
    }

    let text = text.to_lowercase();
    let mut sentiment = NEUTRAL_SCORE;
    let mut keyword_matches = 0usize;

    for &(keyword, weight) in POSITIVE_KEYWORDS.iter().chain(NEGATIVE_KEYWORDS) {
        let matches = text.matches(keyword).count();
        if matches > 0 {
            sentiment += matches as f64 * f64::from(weight);
            keyword_matches += matches;
        }
    }

    sentiment += tier_bonus(comment_count, COMMENT_BONUS_TIERS, 0.0);

    tracing::debug!(
        sentiment,
        keyword_matches,
        comment_count,
        "sentiment scored"
    );
    clamp_score(sentiment)
}
