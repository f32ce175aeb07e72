// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators computed
// over the close column.  Every series output is aligned 1:1 with the input;
// entries with insufficient rolling history are NaN, never zero.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rolling;
pub mod rsi;

pub use bollinger::{calculate_bollinger, BollingerBands};
pub use ema::calculate_ema;
pub use macd::{calculate_macd, Macd};
pub use rsi::calculate_rsi;

use crate::types::PriceSeries;

/// RSI over a price series.  See [`rsi::calculate_rsi`].
pub fn rsi(series: &PriceSeries, period: usize) -> Vec<f64> {
    calculate_rsi(series.closes(), period)
}

/// Bollinger Bands over a price series.  See [`bollinger::calculate_bollinger`].
pub fn bollinger(series: &PriceSeries, period: usize, num_std: f64) -> BollingerBands {
    calculate_bollinger(series.closes(), period, num_std)
}

/// MACD over a price series.  See [`macd::calculate_macd`].
pub fn macd(series: &PriceSeries, fast: usize, slow: usize, signal: usize) -> Macd {
    calculate_macd(series.closes(), fast, slow, signal)
}
