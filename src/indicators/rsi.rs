// =============================================================================
// Relative Strength Index (RSI) — rolling-mean averaging
// =============================================================================
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Split each delta into gain = max(delta, 0), loss = max(-delta, 0).
// Step 3 — avg_gain / avg_loss = simple rolling mean over `period` deltas.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// This is deliberately the rolling-mean variant, not Wilder's exponential
// smoothing: substituting Wilder's form would change every numeric output.
//
// Degenerate windows fall straight out of IEEE-754 arithmetic and are left
// untouched: avg_loss = 0 with gains present gives RS = +inf and RSI = 100;
// a window with no movement at all gives 0/0 = NaN and the RSI stays NaN.
// =============================================================================

use crate::indicators::rolling::rolling_mean;

/// Compute the full RSI series for the given `closes` and `period`.
///
/// The output is aligned 1:1 with the input: entries before index `period`
/// are NaN (one delta is consumed up front, then `period` deltas fill the
/// averaging window).
///
/// # Edge cases
/// - `period == 0` => all-NaN output
/// - `closes.len() < period + 1` => all-NaN output
/// - all-gain window => RSI = 100; all-loss window => RSI = 0
/// - zero-movement window => RSI = NaN (0/0), preserved verbatim
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period + 1 {
        return result;
    }

    let mut gains = Vec::with_capacity(n - 1);
    let mut losses = Vec::with_capacity(n - 1);
    for w in closes.windows(2) {
        let delta = w[1] - w[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    // Delta index i corresponds to close index i + 1.
    for i in (period - 1)..gains.len() {
        let rs = avg_gain[i] / avg_loss[i];
        result[i + 1] = 100.0 - 100.0 / (1.0 + rs);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_empty_input() {
        assert!(calculate_rsi(&[], 14).is_empty());
    }

    #[test]
    fn rsi_period_zero_all_nan() {
        let out = calculate_rsi(&[1.0, 2.0, 3.0], 0);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_insufficient_data_all_nan() {
        // 14 closes => 13 deltas < period.
        let closes: Vec<f64> = (1..=14).map(|x| x as f64).collect();
        assert!(calculate_rsi(&closes, 14).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_warmup_prefix_is_nan() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = calculate_rsi(&closes, 14);
        assert_eq!(out.len(), closes.len());
        assert!(out[..14].iter().all(|v| v.is_nan()));
        assert!(!out[14].is_nan());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        // Strictly ascending prices => avg_loss = 0 => RS = +inf => RSI = 100.
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let out = calculate_rsi(&closes, 14);
        for &v in &out[14..] {
            assert!((v - 100.0).abs() < 1e-10, "expected 100.0, got {v}");
        }
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let out = calculate_rsi(&closes, 14);
        for &v in &out[14..] {
            assert!(v.abs() < 1e-10, "expected 0.0, got {v}");
        }
    }

    #[test]
    fn rsi_flat_market_is_nan() {
        // No movement at all: avg_gain = avg_loss = 0, RS = 0/0 = NaN.
        let closes = vec![100.0; 30];
        let out = calculate_rsi(&closes, 14);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_range_check() {
        let closes = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        let out = calculate_rsi(&closes, 14);
        for &v in out.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }

    #[test]
    fn rsi_rolling_window_forgets_old_moves() {
        // One early loss, then only gains: once the loss leaves the rolling
        // window the RSI must hit exactly 100 (a Wilder implementation would
        // approach but never reach it).
        let mut closes = vec![10.0, 9.0];
        for i in 0..20 {
            closes.push(9.0 + (i + 1) as f64);
        }
        let out = calculate_rsi(&closes, 5);
        let last = *out.last().unwrap();
        assert!((last - 100.0).abs() < 1e-10, "expected 100.0, got {last}");
    }
}
