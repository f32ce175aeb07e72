// =============================================================================
// Exponential Moving Average (EMA) — span form, seeded from the first value
// =============================================================================
//
// Formula:
//   multiplier = 2 / (span + 1)
//   EMA_0      = value_0
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// Seeding from the first value (rather than an SMA warm-up, and with no
// bias-correction adjustment) keeps the series defined at every index, which
// the MACD composition relies on.
// =============================================================================

/// Compute the EMA series for `values` with smoothing span `span`.
///
/// The output is aligned 1:1 with the input and defined at every index.
///
/// # Edge cases
/// - `span == 0` => all-NaN output (division-by-zero guard)
/// - empty input => empty vec
/// - a NaN input value poisons every subsequent EMA value, as the recursion
///   dictates; the series is not truncated or repaired.
pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    let n = values.len();
    if span == 0 {
        return vec![f64::NAN; n];
    }
    if n == 0 {
        return Vec::new();
    }

    let multiplier = 2.0 / (span as f64 + 1.0);

    let mut result = Vec::with_capacity(n);
    let mut prev = values[0];
    result.push(prev);

    for &v in &values[1..] {
        prev = v * multiplier + prev * (1.0 - multiplier);
        result.push(prev);
    }

    result
}
