use crate::domain::verdict::TrendLabel;

const TREND_WINDOW: usize = 3;
const SLOPE_THRESHOLD: f64 = 5.0;

/// Classifies the direction of the last three scores.
pub fn classify(recent_scores: &[i32]) -> TrendLabel {
    if recent_scores.len() < TREND_WINDOW {
        return TrendLabel::Stable;
    }

    let slope = recent_slope(recent_scores);
    if slope > SLOPE_THRESHOLD {
        TrendLabel::Improving
    } else if slope < -SLOPE_THRESHOLD {
        TrendLabel::Declining
    } else {
        TrendLabel::Stable
    }
}

/// Slope over the last three scores; 0 when fewer are available.
pub fn recent_slope(recent_scores: &[i32]) -> f64 {
    if recent_scores.len() < TREND_WINDOW {
        return 0.0;
    }
    slope(&recent_scores[recent_scores.len() - TREND_WINDOW..])
}

/// Least-squares slope of score against position (0, 1, 2, ...).
pub fn slope(scores: &[i32]) -> f64 {
    if scores.len() < 2 {
        return 0.0;
    }

    let n = scores.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &score) in scores.iter().enumerate() {
        let x_diff = i as f64 - x_mean;
        let y_diff = f64::from(score) - y_mean;
        numerator += x_diff * y_diff;
        denominator += x_diff * x_diff;
    }

    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
