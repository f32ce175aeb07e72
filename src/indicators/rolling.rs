// =============================================================================
// Rolling-window helpers shared by the indicator and metric modules
// =============================================================================
//
// Both functions return a vector aligned 1:1 with the input: the first
// `window - 1` entries are NaN (insufficient history), and any window that
// contains a NaN yields NaN rather than silently skipping the entry.
// =============================================================================

/// Rolling mean over `window` consecutive values, NaN-padded at the head.
///
/// `window == 0` degenerates to an all-NaN output.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if window == 0 || n < window {
        return result;
    }

    for i in (window - 1)..n {
        let slice = &values[i + 1 - window..=i];
        result[i] = slice.iter().sum::<f64>() / window as f64;
    }

    result
}

/// Rolling sample standard deviation (divisor `window - 1`), NaN-padded.
///
/// A window of 0 or 1 has no sample variance and yields all NaN.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if window < 2 || n < window {
        return result;
    }

    for i in (window - 1)..n {
        let slice = &values[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (window - 1) as f64;
        result[i] = variance.sqrt();
    }

    result
}
