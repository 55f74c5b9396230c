//! Deal quality scoring.
//!
//! Four sub-scores (title sentiment, community reaction, site credibility,
//! freshness) are combined with fixed weights into a 0..=100 index. The
//! clickbait detector and the trend classifier are independent helpers and
//! never feed into the index.

pub mod community;
pub mod fake;
pub mod freshness;
pub mod lexicon;
pub mod sentiment;
pub mod trend;

use crate::domain::contract::DealPayload;
use crate::domain::deal::DealRecord;
use crate::domain::verdict::{EvaluatedDeal, QualityVerdict, ScoreBreakdown, TrendLabel};
use anyhow::ensure;

pub(crate) const NEUTRAL_SCORE: f64 = 50.0;

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

const TITLE_LOG_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub sentiment: f64,
    pub community: f64,
    pub site: f64,
    pub freshness: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        sentiment: 0.4,
        community: 0.3,
        site: 0.2,
        freshness: 0.1,
    };

    fn validate(&self) -> anyhow::Result<()> {
        for (name, weight) in [
            ("sentiment", self.sentiment),
            ("community", self.community),
            ("site", self.site),
            ("freshness", self.freshness),
        ] {
            ensure!(
                weight.is_finite() && weight >= 0.0,
                "{name} weight must be a finite non-negative number (got {weight})"
            );
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw sub-scores, each already clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub sentiment: f64,
    pub community: f64,
    pub site: f64,
    pub freshness: f64,
}

impl SubScores {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            sentiment: truncate_score(self.sentiment),
            community: truncate_score(self.community),
            site: truncate_score(self.site),
            freshness: truncate_score(self.freshness),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DealQualityAnalyzer {
    weights: ScoreWeights,
}

impl DealQualityAnalyzer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Scores a deal. Never fails: anything that goes wrong yields
    /// [`QualityVerdict::fallback`].
    pub fn evaluate(&self, deal: &DealRecord) -> QualityVerdict {
        match self.try_evaluate(deal) {
            Ok(verdict) => verdict,
            Err(err) => {
                tracing::error!(
                    title = %title_preview(&deal.title),
                    error = %format!("{err:#}"),
                    "deal quality analysis failed; using fallback verdict"
                );
                QualityVerdict::fallback()
            }
        }
    }

    /// Validates an upstream payload and scores it, falling back on invalid input.
    pub fn evaluate_payload(&self, payload: DealPayload) -> QualityVerdict {
        let title = title_preview(&payload.title);
        match payload.validate_and_into_record() {
            Ok(deal) => self.evaluate(&deal),
            Err(err) => {
                tracing::error!(
                    %title,
                    error = %format!("{err:#}"),
                    "invalid deal payload; using fallback verdict"
                );
                QualityVerdict::fallback()
            }
        }
    }

    /// Full assessment of an upstream payload: verdict, clickbait flag,
    /// trend over `recent_scores` when present, and neutral tags.
    pub fn assess(&self, payload: DealPayload) -> EvaluatedDeal {
        let title = payload.title.clone();
        let site_name = payload.site_name.clone();
        let trend = payload
            .recent_scores
            .as_deref()
            .map(|scores| self.classify_trend(scores));
        let suspicious = self.is_suspicious(&title);
        let neutral_keywords = lexicon::neutral_keywords_in(&title)
            .into_iter()
            .map(str::to_string)
            .collect();
        let verdict = self.evaluate_payload(payload);

        EvaluatedDeal {
            title,
            site_name,
            verdict,
            suspicious,
            trend,
            neutral_keywords,
        }
    }

    pub fn try_evaluate(&self, deal: &DealRecord) -> anyhow::Result<QualityVerdict> {
        tracing::debug!(title = %title_preview(&deal.title), "deal quality analysis started");

        self.weights.validate()?;

        let sub = self.sub_scores(deal);
        let combined = self.combine(&sub);
        ensure!(
            combined.is_finite(),
            "combined score is not finite (sub-scores: {sub:?})"
        );

        let score = truncate_score(combined);
        let breakdown = sub.breakdown();

        tracing::debug!(
            score,
            sentiment = breakdown.sentiment,
            community = breakdown.community,
            site = breakdown.site,
            freshness = breakdown.freshness,
            "deal quality analysis finished"
        );

        Ok(QualityVerdict::from_score(score, breakdown))
    }

    pub fn sub_scores(&self, deal: &DealRecord) -> SubScores {
        SubScores {
            sentiment: sentiment::score(&deal.title, deal.comment_count),
            community: community::score(
                deal.view_count,
                deal.comment_count,
                deal.like_count,
                deal.dislike_count,
            ),
            site: f64::from(lexicon::site_credibility(deal.site_name.as_deref())),
            freshness: freshness::score(deal.created_at.as_deref()),
        }
    }

    fn combine(&self, sub: &SubScores) -> f64 {
        let w = &self.weights;
        let total = sub.sentiment * w.sentiment
            + sub.community * w.community
            + sub.site * w.site
            + sub.freshness * w.freshness;
        clamp_score(total)
    }

    pub fn is_suspicious(&self, title: &str) -> bool {
        fake::is_suspicious(title)
    }

    pub fn classify_trend(&self, recent_scores: &[i32]) -> TrendLabel {
        trend::classify(recent_scores)
    }
}

pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

fn truncate_score(value: f64) -> u8 {
    // `as` saturates and truncates toward zero; NaN becomes 0.
    clamp_score(value) as u8
}

/// Bonus of the first tier whose threshold `value` reaches. Tiers are
/// ordered highest threshold first.
pub(crate) fn tier_bonus<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)], otherwise: f64) -> f64 {
    tiers
        .iter()
        .find(|&&(threshold, _)| value >= threshold)
        .map(|&(_, bonus)| bonus)
        .unwrap_or(otherwise)
}

fn title_preview(title: &str) -> String {
    title.chars().take(TITLE_LOG_CHARS).collect()
}
