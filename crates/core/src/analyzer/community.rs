use super::{clamp_score, tier_bonus, NEUTRAL_SCORE};

const VIEW_BONUS_TIERS: &[(u32, f64)] = &[(10_000, 20.0), (5_000, 15.0), (1_000, 10.0), (500, 5.0)];

// Comments per 100 views.
const PARTICIPATION_BONUS_TIERS: &[(f64, f64)] = &[(5.0, 15.0), (2.0, 10.0), (1.0, 5.0)];

// Below the last tier the crowd is net negative.
const LIKE_RATIO_BONUS_TIERS: &[(f64, f64)] = &[(0.8, 15.0), (0.6, 10.0), (0.4, 0.0)];
const NEGATIVE_REACTION_PENALTY: f64 = -10.0;

pub fn score(view_count: u32, comment_count: u32, like_count: u32, dislike_count: u32) -> f64 {
    let mut community = NEUTRAL_SCORE;

    community += tier_bonus(view_count, VIEW_BONUS_TIERS, 0.0);

    if view_count > 0 {
        let participation_ratio = f64::from(comment_count) / f64::from(view_count) * 100.0;
        community += tier_bonus(participation_ratio, PARTICIPATION_BONUS_TIERS, 0.0);
    }

    let total_votes = u64::from(like_count) + u64::from(dislike_count);
    if total_votes > 0 {
        let like_ratio = f64::from(like_count) / total_votes as f64;
        community += tier_bonus(
            like_ratio,
            LIKE_RATIO_BONUS_TIERS,
            NEGATIVE_REACTION_PENALTY,
        );
    }

    tracing::debug!(
        community,
        view_count,
        comment_count,
        like_count,
        dislike_count,
        "community reaction scored"
    );
    clamp_score(community)
}
