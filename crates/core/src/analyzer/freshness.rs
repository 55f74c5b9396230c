use super::NEUTRAL_SCORE;
use crate::time::relative_age;

// (max hours ago, score), checked in order.
const FRESHNESS_BUCKETS: &[(u32, f64)] = &[(1, 100.0), (6, 85.0), (24, 70.0), (72, 50.0)];
const STALE_SCORE: f64 = 30.0;

pub fn score(created_at: Option<&str>) -> f64 {
    let Some(token) = created_at.filter(|s| !s.is_empty()) else {
        return NEUTRAL_SCORE;
    };

    let hours_ago = relative_age::hours_ago(token);
    let freshness = FRESHNESS_BUCKETS
        .iter()
        .find(|&&(max_hours, _)| hours_ago <= max_hours)
        .map(|&(_, score)| score)
        .unwrap_or(STALE_SCORE);

    tracing::debug!(freshness, hours_ago, token, "freshness scored");
    freshness
}
