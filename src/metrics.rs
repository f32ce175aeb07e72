// =============================================================================
// Return & Risk Metrics — derived from the close column
// =============================================================================
//
// All functions here are pure and operate on a plain close-price slice:
//
//   simple_returns        r[t] = close[t] / close[t-1] - 1       (t >= 1)
//   annualized_volatility sample std of returns * sqrt(periods/year)
//   cumulative_return     prod(1 + r[t]) - 1
//   max_drawdown          min over t of close[t] / running_peak[t] - 1
//   moving_average        NaN-padded SMA of the closes
//
// The annualization factor is an explicit argument rather than a hard-coded
// 252: the engine derives it from the configured series interval.
// =============================================================================

use crate::indicators::rolling::rolling_mean;

/// Percentage returns between consecutive closes.
///
/// The output has one fewer element than the input: the first close has no
/// predecessor, so its return is dropped (not zero, not NaN).
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Annualized volatility: sample standard deviation of the returns scaled by
/// `sqrt(periods_per_year)`.
///
/// NaN when fewer than two returns exist (no sample variance).
pub fn annualized_volatility(returns: &[f64], periods_per_year: f64) -> f64 {
    if returns.len() < 2 {
        return f64::NAN;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    variance.sqrt() * periods_per_year.sqrt()
}

/// Cumulative return over the whole series: `prod(1 + r) - 1`.
///
/// An empty return series compounds to 0.
pub fn cumulative_return(returns: &[f64]) -> f64 {
    returns.iter().fold(1.0, |acc, r| acc * (1.0 + r)) - 1.0
}

/// Maximum drawdown: the most negative percentage decline from the running
/// historical peak.  0 when the price never falls below its running peak.
///
/// The peak is the running maximum from the series start, not a fixed-window
/// rolling max.
pub fn max_drawdown(closes: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0f64;

    for &close in closes {
        peak = peak.max(close);
        let drawdown = close / peak - 1.0;
        worst = worst.min(drawdown);
    }

    worst
}

/// Simple moving average of the closes, aligned 1:1 with the input; the first
/// `window - 1` entries are NaN.
pub fn moving_average(closes: &[f64], window: usize) -> Vec<f64> {
    rolling_mean(closes, window)
}
