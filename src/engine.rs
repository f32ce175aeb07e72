// =============================================================================
// Stats Engine — partition → map → reduce → metric dispatch
// =============================================================================
//
// The compute entry point of the crate.  A single call:
//
//   1. validates the request (the series was already validated on
//      construction; the moving-average window is checked here),
//   2. partitions the close column into balanced chunks,
//   3. maps the chunks on a bounded worker pool (identity copy),
//   4. reduces positionally and derives the base statistics,
//   5. populates only the requested metric keys.
//
// The call runs to completion or fails as a unit: a worker failure discards
// every partial result.  The returns series is computed at most once even
// when several return-derived metrics are requested.
// =============================================================================

use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::mapreduce::{compute_base_stats, map_chunks, partition, reduce_concat, CloseMapper};
use crate::mapreduce::mapper::resolve_worker_count;
use crate::metrics::{
    annualized_volatility, cumulative_return, max_drawdown, moving_average, simple_returns,
};
use crate::indicators::{
    calculate_bollinger, calculate_macd, calculate_rsi, BollingerBands, Macd,
};
use crate::types::{Metric, MetricValue, PriceSeries, ResultMap};

/// The statistics and indicator computation engine.
///
/// Owns its configuration; every compute call is otherwise stateless, so one
/// engine can serve any number of independent requests.
pub struct StatsEngine {
    config: EngineConfig,
}

impl StatsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the requested metrics over `series`.
    ///
    /// Only requested metrics appear in the output; the moving average is
    /// keyed `ma_{window}`.  `ma_window` must be at least 2 whenever the
    /// moving average is requested.
    pub fn compute(
        &self,
        series: &PriceSeries,
        metrics: &HashSet<Metric>,
        ma_window: usize,
    ) -> Result<ResultMap, EngineError> {
        if metrics.contains(&Metric::MovingAverage) && ma_window < 2 {
            return Err(EngineError::input(format!(
                "moving-average window must be >= 2, got {ma_window}"
            )));
        }

        let workers = resolve_worker_count(self.config.worker_cap);
        let closes = series.closes();

        info!(
            len = closes.len(),
            workers,
            requested = metrics.len(),
            "computing statistics"
        );

        // Map-reduce over the close column for the base statistics.
        let chunks = partition(closes, workers);
        debug!(chunks = chunks.len(), "partitioned close column");

        let mapped = map_chunks(&CloseMapper, &chunks, workers)?;
        let flat = reduce_concat(mapped);
        let stats = compute_base_stats(&flat);

        let mut results = ResultMap::new();

        if metrics.contains(&Metric::Mean) {
            results.insert(Metric::Mean.key().into(), MetricValue::Scalar(stats.mean));
        }
        if metrics.contains(&Metric::Min) {
            results.insert(Metric::Min.key().into(), MetricValue::Scalar(stats.min));
        }
        if metrics.contains(&Metric::Max) {
            results.insert(Metric::Max.key().into(), MetricValue::Scalar(stats.max));
        }
        if metrics.contains(&Metric::Std) {
            results.insert(Metric::Std.key().into(), MetricValue::Scalar(stats.std));
        }

        // Return-derived metrics share one returns pass.
        let needs_returns = [Metric::Returns, Metric::Volatility, Metric::CumulativeReturn]
            .iter()
            .any(|m| metrics.contains(m));

        if needs_returns {
            let returns = simple_returns(closes);

            if metrics.contains(&Metric::Volatility) {
                let vol =
                    annualized_volatility(&returns, self.config.interval.periods_per_year());
                results.insert(Metric::Volatility.key().into(), MetricValue::Scalar(vol));
            }
            if metrics.contains(&Metric::CumulativeReturn) {
                results.insert(
                    Metric::CumulativeReturn.key().into(),
                    MetricValue::Scalar(cumulative_return(&returns)),
                );
            }
            if metrics.contains(&Metric::Returns) {
                results.insert(Metric::Returns.key().into(), MetricValue::Series(returns));
            }
        }

        if metrics.contains(&Metric::MaxDrawdown) {
            results.insert(
                Metric::MaxDrawdown.key().into(),
                MetricValue::Scalar(max_drawdown(closes)),
            );
        }

        if metrics.contains(&Metric::MovingAverage) {
            results.insert(
                format!("ma_{ma_window}"),
                MetricValue::Series(moving_average(closes, ma_window)),
            );
        }

        Ok(results)
    }

    /// RSI with the configured period.
    pub fn rsi(&self, series: &PriceSeries) -> Vec<f64> {
        calculate_rsi(series.closes(), self.config.rsi_period)
    }

    /// Bollinger Bands with the configured period and width.
    pub fn bollinger(&self, series: &PriceSeries) -> BollingerBands {
        calculate_bollinger(
            series.closes(),
            self.config.bollinger_period,
            self.config.bollinger_num_std,
        )
    }

    /// MACD with the configured spans.
    pub fn macd(&self, series: &PriceSeries) -> Macd {
        calculate_macd(
            series.closes(),
            self.config.macd_fast,
            self.config.macd_slow,
            self.config.macd_signal,
        )
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
