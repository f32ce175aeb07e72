// =============================================================================
// Bollinger Bands — full-series form
// =============================================================================
//
// middle = SMA(close, period)
// sigma  = rolling sample standard deviation (divisor period - 1)
// upper  = middle + k * sigma
// lower  = middle - k * sigma
//
// All three bands are aligned 1:1 with the input; the first `period - 1`
// entries are NaN.
// =============================================================================

use serde::Serialize;

use crate::indicators::rolling::{rolling_mean, rolling_std};

/// The three Bollinger band series, each aligned with the input closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerBands {
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Calculate Bollinger Bands over the full close series.
///
/// `num_std` is the band half-width in standard deviations (conventionally 2).
/// Entries with insufficient rolling history are NaN in all three bands.
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> BollingerBands {
    let middle = rolling_mean(closes, period);
    let sigma = rolling_std(closes, period);

    let upper = middle
        .iter()
        .zip(&sigma)
        .map(|(m, s)| m + num_std * s)
        .collect();
    let lower = middle
        .iter()
        .zip(&sigma)
        .map(|(m, s)| m - num_std * s)
        .collect();

    BollingerBands {
        upper,
        middle,
        lower,
    }
}
