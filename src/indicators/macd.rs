// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// macd      = EMA(close, fast) - EMA(close, slow)
// signal    = EMA(macd, signal_span)
// histogram = macd - signal
//
// The EMAs are seeded from the first value (see `ema.rs`), so every series is
// defined at every index — there is no NaN warm-up here.
// =============================================================================

use serde::Serialize;

use crate::indicators::ema::calculate_ema;

/// MACD line, signal line, and histogram, each aligned with the input closes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Macd {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl Macd {
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// Calculate MACD with the given fast / slow / signal EMA spans.
pub fn calculate_macd(closes: &[f64], fast: usize, slow: usize, signal_span: usize) -> Macd {
    let ema_fast = calculate_ema(closes, fast);
    let ema_slow = calculate_ema(closes, slow);

    let macd: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();

    let signal = calculate_ema(&macd, signal_span);

    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    Macd {
        macd,
        signal,
        histogram,
    }
}
