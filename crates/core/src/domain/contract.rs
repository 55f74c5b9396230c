use crate::domain::deal::DealRecord;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Deal as delivered by upstream fetchers. Counters are signed because
/// scrapers occasionally emit `-1` for "unknown".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DealPayload {
    pub title: String,
    pub site_name: Option<String>,
    pub view_count: i64,
    pub comment_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: Option<String>,
    /// Prior quality scores for the same deal, oldest first.
    pub recent_scores: Option<Vec<i32>>,
}

impl DealPayload {
    pub fn validate_and_into_record(self) -> anyhow::Result<DealRecord> {
        let view_count = counter("view_count", self.view_count)?;
        let comment_count = counter("comment_count", self.comment_count)?;
        let like_count = counter("like_count", self.like_count)?;
        let dislike_count = counter("dislike_count", self.dislike_count)?;

        let site_name = self
            .site_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let created_at = self
            .created_at
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(DealRecord {
            title: self.title,
            site_name,
            view_count,
            comment_count,
            like_count,
            dislike_count,
            created_at,
        })
    }
}

fn counter(field: &'static str, value: i64) -> anyhow::Result<u32> {
    anyhow::ensure!(value >= 0, "{field} must be non-negative (got {value})");
    u32::try_from(value).with_context(|| format!("{field} out of range (got {value})"))
}
