// =============================================================================
// Summarizer — performance score + three-tier risk classification
// =============================================================================
//
// performance_score:
//   score_return = clamp((cumulative_return * 100 + 50) / 10, 0, 10)
//   penalty      = clamp(volatility * 100 / 20, 0, 5)
//   score        = clamp(score_return - penalty, 0, 10), one decimal
//
// risk_classification (on volatility * 100):
//   < 20 => Low, < 40 => Moderate, else High
//
// Both functions are pure and total: every finite input maps to a result.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::types::{Metric, MetricValue, ResultMap};

/// Three-tier risk bucket derived from annualized volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Combined score + risk bucket for dashboard-style consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub score: f64,
    pub risk: RiskLevel,
}

/// Map cumulative return and volatility to a bounded [0, 10] score, rounded
/// to one decimal.
///
/// Non-decreasing in `cumulative_return`, non-increasing in `volatility`.
pub fn performance_score(cumulative_return: f64, volatility: f64) -> f64 {
    let score_return = ((cumulative_return * 100.0 + 50.0) / 10.0).clamp(0.0, 10.0);
    let penalty = (volatility * 100.0 / 20.0).clamp(0.0, 5.0);
    let score = (score_return - penalty).clamp(0.0, 10.0);
    (score * 10.0).round() / 10.0
}

/// Classify annualized volatility into Low / Moderate / High.
pub fn risk_classification(volatility: f64) -> RiskLevel {
    let pct = volatility * 100.0;
    if pct < 20.0 {
        RiskLevel::Low
    } else if pct < 40.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Build a [`Summary`] from a result map, if it contains both the
/// `cumulative_return` and `volatility` scalars.
pub fn summarize(results: &ResultMap) -> Option<Summary> {
    let cumulative = results
        .get(Metric::CumulativeReturn.key())
        .and_then(MetricValue::as_scalar)?;
    let volatility = results
        .get(Metric::Volatility.key())
        .and_then(MetricValue::as_scalar)?;

    Some(Summary {
        score: performance_score(cumulative, volatility),
        risk: risk_classification(volatility),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_neutral_inputs() {
        // 0% return, 0 volatility: score_return = 5.0, penalty = 0.
        assert!((performance_score(0.0, 0.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn score_clamped_to_bounds() {
        assert!((performance_score(10.0, 0.0) - 10.0).abs() < 1e-12);
        assert!(performance_score(-10.0, 5.0).abs() < 1e-12);
    }

    #[test]
    fn score_rounded_to_one_decimal() {
        let score = performance_score(0.0333, 0.0);
        assert!((score - 5.3).abs() < 1e-12);
    }

    #[test]
    fn score_monotone_in_return() {
        let vol = 0.25;
        let mut prev = f64::NEG_INFINITY;
        for i in -60..=60 {
            let ret = i as f64 / 100.0;
            let score = performance_score(ret, vol);
            assert!(score >= prev, "score regressed at return {ret}");
            assert!((0.0..=10.0).contains(&score));
            prev = score;
        }
    }

    #[test]
    fn score_antitone_in_volatility() {
        let ret = 0.10;
        let mut prev = f64::INFINITY;
        for i in 0..=120 {
            let vol = i as f64 / 100.0;
            let score = performance_score(ret, vol);
            assert!(score <= prev, "score rose at volatility {vol}");
            prev = score;
        }
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(risk_classification(0.0), RiskLevel::Low);
        assert_eq!(risk_classification(0.199), RiskLevel::Low);
        assert_eq!(risk_classification(0.20), RiskLevel::Moderate);
        assert_eq!(risk_classification(0.399), RiskLevel::Moderate);
        assert_eq!(risk_classification(0.40), RiskLevel::High);
        assert_eq!(risk_classification(1.5), RiskLevel::High);
    }

    #[test]
    fn risk_display_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn summarize_requires_both_scalars() {
        let mut results = ResultMap::new();
        assert!(summarize(&results).is_none());

        results.insert("cumulative_return".into(), MetricValue::Scalar(0.10));
        assert!(summarize(&results).is_none());

        results.insert("volatility".into(), MetricValue::Scalar(0.30));
        let summary = summarize(&results).unwrap();
        assert_eq!(summary.risk, RiskLevel::Moderate);
        assert!((summary.score - performance_score(0.10, 0.30)).abs() < 1e-12);
    }

    #[test]
    fn summarize_ignores_series_shaped_values() {
        let mut results = ResultMap::new();
        results.insert(
            "cumulative_return".into(),
            MetricValue::Series(vec![0.1]),
        );
        results.insert("volatility".into(), MetricValue::Scalar(0.1));
        assert!(summarize(&results).is_none());
    }
}
