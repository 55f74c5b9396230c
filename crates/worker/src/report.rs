use anyhow::Context;
use chrono::{DateTime, Utc};
use insightdeal_core::domain::contract::DealPayload;
use insightdeal_core::domain::verdict::{DealBadge, EvaluatedDeal};
use insightdeal_core::DealQualityAnalyzer;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub average_score: Option<f64>,
    pub badge_counts: BTreeMap<DealBadge, usize>,
    pub suspicious_count: usize,
    /// Items at or above `--min-score`, best first. Counts above cover every deal.
    pub items: Vec<EvaluatedDeal>,
}

pub fn parse_payloads(text: &str) -> anyhow::Result<Vec<DealPayload>> {
    serde_json::from_str::<Vec<DealPayload>>(text)
        .context("input must be a JSON array of deal objects")
}

pub fn build_report(
    analyzer: &DealQualityAnalyzer,
    payloads: Vec<DealPayload>,
    min_score: Option<u8>,
    generated_at: DateTime<Utc>,
) -> BatchReport {
    let assessed: Vec<EvaluatedDeal> = payloads
        .into_iter()
        .map(|payload| analyzer.assess(payload))
        .collect();

    let total = assessed.len();
    let mut badge_counts = BTreeMap::new();
    let mut suspicious_count = 0;
    let mut score_sum: u64 = 0;
    for item in &assessed {
        *badge_counts.entry(item.verdict.badge).or_insert(0) += 1;
        if item.suspicious {
            suspicious_count += 1;
        }
        score_sum += u64::from(item.verdict.score);
    }

    let average_score = (total > 0).then(|| score_sum as f64 / total as f64);

    let mut items: Vec<EvaluatedDeal> = assessed
        .into_iter()
        .filter(|item| min_score.map_or(true, |min| item.verdict.score >= min))
        .collect();
    // Stable sort keeps input order among equal scores.
    items.sort_by(|a, b| b.verdict.score.cmp(&a.verdict.score));

    BatchReport {
        generated_at,
        total,
        average_score,
        badge_counts,
        suspicious_count,
        items,
    }
}
