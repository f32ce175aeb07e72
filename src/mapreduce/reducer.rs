// =============================================================================
// Reducer — positional concatenation + one-pass base statistics
// =============================================================================
//
// `reduce_concat` glues the per-chunk outputs back together in chunk order,
// which restores the original element order exactly.  `compute_base_stats`
// then derives mean / min / max / std in a single pass.
//
// NaN entries are ignored by every statistic (nan-mean semantics).  `std` is
// the sample standard deviation (Bessel-corrected, divisor N-1) and is NaN
// when fewer than two finite values remain — documented, not an error.
// =============================================================================

use serde::Serialize;

/// Summary statistics over the reduced close column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

/// Concatenate per-chunk outputs in chunk order into one flat sequence.
pub fn reduce_concat(mapped: Vec<Vec<f64>>) -> Vec<f64> {
    let total: usize = mapped.iter().map(Vec::len).sum();
    let mut flat = Vec::with_capacity(total);
    for part in mapped {
        flat.extend(part);
    }
    flat
}

/// One-pass mean / min / max / sample-std over `values`, ignoring NaN entries.
///
/// With no finite values every field is NaN; with exactly one, `std` alone is
/// NaN.  Uses Welford's recurrence for the variance so a single pass suffices
/// without catastrophic cancellation.
pub fn compute_base_stats(values: &[f64]) -> BaseStats {
    let mut count = 0usize;
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in values {
        if v.is_nan() {
            continue;
        }
        count += 1;
        let delta = v - mean;
        mean += delta / count as f64;
        m2 += delta * (v - mean);
        min = min.min(v);
        max = max.max(v);
    }

    if count == 0 {
        return BaseStats {
            mean: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            std: f64::NAN,
        };
    }

    let std = if count < 2 {
        f64::NAN
    } else {
        (m2 / (count - 1) as f64).sqrt()
    };

    BaseStats {
        mean,
        min,
        max,
        std,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_restores_order() {
        let mapped = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        assert_eq!(reduce_concat(mapped), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn concat_empty_input() {
        assert!(reduce_concat(Vec::new()).is_empty());
    }

    #[test]
    fn stats_reference_values() {
        // [1..5]: mean 3, min 1, max 5, sample std sqrt(2.5) = 1.5811...
        let stats = compute_base_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.min - 1.0).abs() < 1e-12);
        assert!((stats.max - 5.0).abs() < 1e-12);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn stats_ignore_nan_entries() {
        let with_nan = [1.0, f64::NAN, 2.0, 3.0, f64::NAN, 4.0, 5.0];
        let clean = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_base_stats(&with_nan), compute_base_stats(&clean));
    }

    #[test]
    fn stats_single_value_has_nan_std() {
        let stats = compute_base_stats(&[42.0]);
        assert!((stats.mean - 42.0).abs() < 1e-12);
        assert!((stats.min - 42.0).abs() < 1e-12);
        assert!((stats.max - 42.0).abs() < 1e-12);
        assert!(stats.std.is_nan());
    }

    #[test]
    fn stats_all_nan_input() {
        let stats = compute_base_stats(&[f64::NAN, f64::NAN]);
        assert!(stats.mean.is_nan());
        assert!(stats.min.is_nan());
        assert!(stats.max.is_nan());
        assert!(stats.std.is_nan());
    }

    #[test]
    fn stats_negative_values() {
        let stats = compute_base_stats(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert!(stats.mean.abs() < 1e-12);
        assert!((stats.min + 2.0).abs() < 1e-12);
        assert!((stats.max - 2.0).abs() < 1e-12);
        assert!((stats.std - 2.5f64.sqrt()).abs() < 1e-12);
    }
}
