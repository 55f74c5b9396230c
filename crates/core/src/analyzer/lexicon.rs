//! Constant keyword, clickbait and site-credibility tables.
//!
//! Keywords are matched as lowercase literal substrings, so Korean stems like
//! "괜찮" also match inflected forms ("괜찮아요", "괜찮네").

pub const POSITIVE_KEYWORDS: &[(&str, i32)] = &[
    ("대박", 20),
    ("꿀딜", 18),
    ("가성비", 15),
    ("강추", 15),
    ("추천", 12),
    ("좋다", 10),
    ("괜찮", 8),
    ("만족", 10),
    ("저렴", 12),
    ("싸다", 12),
    ("혜택", 10),
    ("이득", 10),
    ("득템", 15),
    ("완전", 8),
    ("최고", 12),
    ("굿", 8),
    ("good", 8),
    ("짱", 10),
];

/// Weights are already negative; scorers add them as-is.
pub const NEGATIVE_KEYWORDS: &[(&str, i32)] = &[
    ("사기", -25),
    ("품절", -15),
    ("비싸", -12),
    ("별로", -10),
    ("실망", -15),
    ("후회", -18),
    ("최악", -20),
    ("망함", -20),
    ("돈아까", -15),
    ("쓰레기", -25),
    ("거품", -12),
    ("과대광고", -18),
    ("주의", -8),
    ("조심", -8),
    ("피하", -15),
    ("사지마", -20),
    ("비추", -12),
];

/// Informational terms. Never contribute to any score.
pub const NEUTRAL_KEYWORDS: &[&str] = &[
    "정보", "후기", "리뷰", "궁금", "문의", "질문", "어떤", "어디", "언제", "얼마", "몇개", "크기",
    "배송", "택배", "수령", "도착", "주문", "결제",
];

pub const CLICKBAIT_PATTERNS: &[&str] = &[
    "절대",
    "무조건",
    "100%",
    "확실한",
    "보장",
    "기회",
    "놓치면",
    "마지막",
    "한정",
    "특별",
    "!!!",
    "???",
    "대박!!!",
    "헐...",
];

pub const SITE_CREDIBILITY: &[(&str, u8)] = &[
    ("ppomppu", 85),
    ("fmkorea", 85),
    ("bbasak", 75),
    ("ruliweb", 70),
    ("clien", 70),
    ("quasarzone", 70),
];

pub const DEFAULT_SITE_CREDIBILITY: u8 = 50;

pub fn site_credibility(site_name: Option<&str>) -> u8 {
    let Some(site) = site_name else {
        return DEFAULT_SITE_CREDIBILITY;
    };
    let site = site.to_lowercase();
    SITE_CREDIBILITY
        .iter()
        .find(|(name, _)| *name == site)
        .map(|&(_, trust)| trust)
        .unwrap_or(DEFAULT_SITE_CREDIBILITY)
}

pub fn neutral_keywords_in(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    NEUTRAL_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sites_return_table_value() {
        for &(name, trust) in SITE_CREDIBILITY {
            assert_eq!(site_credibility(Some(name)), trust);
        }
        assert_eq!(site_credibility(Some("ppomppu")), 85);
        assert_eq!(site_credibility(Some("bbasak")), 75);
    }

    #[test]
    fn site_lookup_ignores_case() {
        assert_eq!(site_credibility(Some("PPOMPPU")), 85);
        assert_eq!(site_credibility(Some("FmKorea")), 85);
    }

    #[test]
    fn unknown_or_absent_site_defaults() {
        assert_eq!(site_credibility(Some("unknown_site")), 50);
        assert_eq!(site_credibility(Some("")), 50);
        assert_eq!(site_credibility(None), 50);
    }

    #[test]
    fn keyword_tables_have_expected_signs() {
        assert!(POSITIVE_KEYWORDS.iter().all(|&(_, w)| w > 0));
        assert!(NEGATIVE_KEYWORDS.iter().all(|&(_, w)| w < 0));
        assert!(SITE_CREDIBILITY.iter().all(|&(_, t)| t <= 100));
    }

    #[test]
    fn neutral_keywords_are_listed_in_table_order() {
        assert_eq!(neutral_keywords_in("배송 후기 정보"), vec!["정보", "후기", "배송"]);
        assert!(neutral_keywords_in("대박 꿀딜").is_empty());
    }
}
