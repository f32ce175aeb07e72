// =============================================================================
// Quote Insight Engine — statistics & technical indicators over price series
// =============================================================================
//
// A single-machine map-reduce computes the base statistics (mean / min / max /
// sample std) over the close column of a validated OHLCV series; pure
// functions derive returns, annualized volatility, cumulative return, maximum
// drawdown, moving averages, and the RSI / Bollinger / MACD indicator series;
// a summarizer folds (cumulative return, volatility) into a bounded score and
// a three-tier risk bucket.
//
// Quote fetching and presentation are external collaborators: this crate
// neither performs I/O on the hot path nor renders anything.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod mapreduce;
pub mod metrics;
pub mod summary;
pub mod types;

pub use config::{EngineConfig, SeriesInterval};
pub use engine::StatsEngine;
pub use error::EngineError;
pub use indicators::{BollingerBands, Macd};
pub use summary::{performance_score, risk_classification, summarize, RiskLevel, Summary};
pub use types::{Candle, Metric, MetricValue, PriceSeries, ResultMap};
