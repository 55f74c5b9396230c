use serde::{Deserialize, Serialize};

pub const FALLBACK_RECOMMENDATION: &str = "분석 중...";

const NEUTRAL_SUB_SCORE: u8 = 50;

/// Badge tiers. Variants are declared worst-first so `Ord` reads as "better than".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealBadge {
    Avoid,
    Caution,
    Okay,
    Recommended,
    SuperHot,
}

impl DealBadge {
    /// Best badge first.
    pub const ALL: [DealBadge; 5] = [
        DealBadge::SuperHot,
        DealBadge::Recommended,
        DealBadge::Okay,
        DealBadge::Caution,
        DealBadge::Avoid,
    ];

    pub fn for_score(score: u8) -> Self {
        Self::ALL
            .into_iter()
            .find(|badge| score >= badge.min_score())
            .unwrap_or(DealBadge::Avoid)
    }

    pub fn min_score(self) -> u8 {
        match self {
            DealBadge::SuperHot => 90,
            DealBadge::Recommended => 70,
            DealBadge::Okay => 50,
            DealBadge::Caution => 30,
            DealBadge::Avoid => 0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DealBadge::SuperHot => "SUPER_HOT",
            DealBadge::Recommended => "RECOMMENDED",
            DealBadge::Okay => "OKAY",
            DealBadge::Caution => "CAUTION",
            DealBadge::Avoid => "AVOID",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            DealBadge::SuperHot => "🔥",
            DealBadge::Recommended => "⭐",
            DealBadge::Okay => "👍",
            DealBadge::Caution => "⚠️",
            DealBadge::Avoid => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DealBadge::SuperHot => "초대박 꿀딜",
            DealBadge::Recommended => "추천 핫딜",
            DealBadge::Okay => "괜찮은 딜",
            DealBadge::Caution => "신중하게",
            DealBadge::Avoid => "피해야 할 딜",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            DealBadge::SuperHot => "#FF3030",
            DealBadge::Recommended => "#FF6B35",
            DealBadge::Okay => "#2196F3",
            DealBadge::Caution => "#9E9E9E",
            DealBadge::Avoid => "#333333",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            DealBadge::SuperHot => "🔥 초대박! 지금 당장 구매하세요!",
            DealBadge::Recommended => "⭐ 추천! 좋은 딜입니다",
            DealBadge::Okay => "👍 괜찮은 가격이에요",
            DealBadge::Caution => "⚠️ 신중하게 검토해보세요",
            DealBadge::Avoid => "❌ 이 딜은 피하시는 게 좋겠어요",
        }
    }
}

/// Sub-scores truncated to integers, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sentiment: u8,
    pub community: u8,
    pub site: u8,
    pub freshness: u8,
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self {
            sentiment: NEUTRAL_SUB_SCORE,
            community: NEUTRAL_SUB_SCORE,
            site: NEUTRAL_SUB_SCORE,
            freshness: NEUTRAL_SUB_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityVerdict {
    pub score: u8,
    pub badge: DealBadge,
    pub recommendation: String,
    pub breakdown: ScoreBreakdown,
}

impl QualityVerdict {
    pub fn from_score(score: u8, breakdown: ScoreBreakdown) -> Self {
        let score = score.min(100);
        let badge = DealBadge::for_score(score);
        Self {
            score,
            badge,
            recommendation: badge.recommendation().to_string(),
            breakdown,
        }
    }

    /// Neutral verdict returned whenever scoring cannot complete.
    pub fn fallback() -> Self {
        Self {
            score: 50,
            badge: DealBadge::Okay,
            recommendation: FALLBACK_RECOMMENDATION.to_string(),
            breakdown: ScoreBreakdown::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendLabel {
    Improving,
    Declining,
    Stable,
}

/// Verdict plus the independent side signals for one deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedDeal {
    pub title: String,
    pub site_name: Option<String>,
    pub verdict: QualityVerdict,
    pub suspicious: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendLabel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neutral_keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_thresholds() {
        assert_eq!(DealBadge::for_score(100), DealBadge::SuperHot);
        assert_eq!(DealBadge::for_score(90), DealBadge::SuperHot);
        assert_eq!(DealBadge::for_score(89), DealBadge::Recommended);
        assert_eq!(DealBadge::for_score(70), DealBadge::Recommended);
        assert_eq!(DealBadge::for_score(69), DealBadge::Okay);
        assert_eq!(DealBadge::for_score(50), DealBadge::Okay);
        assert_eq!(DealBadge::for_score(49), DealBadge::Caution);
        assert_eq!(DealBadge::for_score(30), DealBadge::Caution);
        assert_eq!(DealBadge::for_score(29), DealBadge::Avoid);
        assert_eq!(DealBadge::for_score(0), DealBadge::Avoid);
    }

    #[test]
    fn badge_is_monotonic_in_score() {
        for high in 0..=100u8 {
            for low in 0..=high {
                assert!(
                    DealBadge::for_score(high) >= DealBadge::for_score(low),
                    "badge for {high} is worse than badge for {low}"
                );
            }
        }
    }

    #[test]
    fn recommendation_follows_badge() {
        for score in 0..=100u8 {
            let verdict = QualityVerdict::from_score(score, ScoreBreakdown::default());
            assert_eq!(verdict.recommendation, verdict.badge.recommendation());
        }
    }

    #[test]
    fn fallback_is_neutral() {
        let verdict = QualityVerdict::fallback();
        assert_eq!(verdict.score, 50);
        assert_eq!(verdict.badge, DealBadge::Okay);
        assert_eq!(verdict.recommendation, "분석 중...");
        assert_eq!(
            verdict.breakdown,
            ScoreBreakdown {
                sentiment: 50,
                community: 50,
                site: 50,
                freshness: 50,
            }
        );
    }

    #[test]
    fn badge_serializes_screaming_snake_case() {
        let s = serde_json::to_string(&DealBadge::SuperHot).unwrap();
        assert_eq!(s, "\"SUPER_HOT\"");
        for badge in DealBadge::ALL {
            assert_eq!(
                serde_json::to_value(badge).unwrap(),
                serde_json::Value::String(badge.code().to_string())
            );
        }
    }

    #[test]
    fn trend_serializes_upper_case() {
        let s = serde_json::to_string(&TrendLabel::Improving).unwrap();
        assert_eq!(s, "\"IMPROVING\"");
    }
}
