// =============================================================================
// Shared types used across the quote-insight engine
// =============================================================================

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A single OHLCV record supplied by the quote source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// A validated, time-ordered price series.
///
/// The only constructor is [`PriceSeries::new`], which enforces the input
/// contract the quote source is expected to uphold:
///
/// - at least one candle,
/// - strictly ascending unique timestamps,
/// - every `close` value finite.
///
/// Violations fail loudly with [`EngineError::Input`] before any computation
/// runs. Once constructed, the series is immutable.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    candles: Vec<Candle>,
    /// Close column materialized once so every downstream pass borrows a
    /// plain slice instead of re-projecting the candles.
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(candles: Vec<Candle>) -> Result<Self, EngineError> {
        if candles.is_empty() {
            return Err(EngineError::input("price series is empty"));
        }

        for (i, pair) in candles.windows(2).enumerate() {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(EngineError::input(format!(
                    "timestamps not strictly ascending at index {}: {} then {}",
                    i + 1,
                    pair[0].timestamp,
                    pair[1].timestamp
                )));
            }
        }

        if let Some(i) = candles.iter().position(|c| !c.close.is_finite()) {
            return Err(EngineError::input(format!(
                "close value at index {i} is not finite"
            )));
        }

        let closes = candles.iter().map(|c| c.close).collect();
        Ok(Self { candles, closes })
    }

    /// Number of candles in the series.
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// The close column, in chronological order.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }
}

/// The metrics a caller may request from the compute entry point.
///
/// Unrequested metrics are simply absent from the result map; an absent key
/// means "not requested", never "computed as zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Mean,
    Min,
    Max,
    Std,
    Returns,
    MovingAverage,
    Volatility,
    CumulativeReturn,
    MaxDrawdown,
}

impl Metric {
    /// The result-map key for this metric.
    ///
    /// The moving average is the one exception: its key carries the window
    /// (`ma_{window}`) and is built by the engine at dispatch time.
    pub fn key(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Min => "min",
            Self::Max => "max",
            Self::Std => "std",
            Self::Returns => "returns",
            Self::MovingAverage => "moving_average",
            Self::Volatility => "volatility",
            Self::CumulativeReturn => "cumulative_return",
            Self::MaxDrawdown => "max_drawdown",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single computed metric: either a scalar or a series.
///
/// Series values use `f64::NAN` for undefined entries (insufficient rolling
/// history); callers must preserve those sentinels verbatim. `returns` is the
/// one series shorter than the input (its first entry is dropped, not NaN);
/// every other series is aligned 1:1 with the input series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Scalar(f64),
    Series(Vec<f64>),
}

impl MetricValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Series(s) => Some(s),
        }
    }
}

/// The engine's output: metric key → computed value, only for requested keys.
pub type ResultMap = HashMap<String, MetricValue>;
