use regex::Regex;
use std::sync::LazyLock;

// Community boards render post age as "N분 전", "N시간 전", "N일 전".
// Absolute timestamps are not interpreted and fall through to the default.
const MINUTES_MARKER: &str = "분 전";
const HOURS_MARKER: &str = "시간 전";
const DAYS_MARKER: &str = "일 전";

const DEFAULT_HOURS_AGO: u32 = 24;
const DEFAULT_UNIT_COUNT: u32 = 1;

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)시간").expect("valid hours regex"));
static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)일").expect("valid days regex"));

/// Approximate age in hours for a relative-age token.
pub fn hours_ago(token: &str) -> u32 {
    if token.contains(MINUTES_MARKER) {
        0
    } else if token.contains(HOURS_MARKER) {
        leading_count(&HOURS_RE, token)
    } else if token.contains(DAYS_MARKER) {
        leading_count(&DAYS_RE, token).saturating_mul(24)
    } else {
        DEFAULT_HOURS_AGO
    }
}

fn leading_count(re: &Regex, token: &str) -> u32 {
    re.captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_UNIT_COUNT)
}
