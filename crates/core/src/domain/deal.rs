use serde::{Deserialize, Serialize};

/// A deal posting as handed over by the fetch layer, already validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealRecord {
    pub title: String,
    pub site_name: Option<String>,
    pub view_count: u32,
    pub comment_count: u32,
    pub like_count: u32,
    pub dislike_count: u32,
    /// Relative-age token such as "3시간 전" or "2일 전".
    pub created_at: Option<String>,
}
