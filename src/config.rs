// =============================================================================
// Engine Configuration — tunable compute parameters with atomic save
// =============================================================================
//
// Every tunable parameter of the statistics engine lives here: the worker cap
// for the map stage, the series interval that drives return annualization,
// and the default look-back periods for the indicator entry points.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_worker_cap() -> usize {
    4
}

fn default_rsi_period() -> usize {
    14
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_num_std() -> f64 {
    2.0
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

// =============================================================================
// SeriesInterval
// =============================================================================

/// Sampling interval of the input price series.
///
/// Drives the annualization factor applied to volatility: a hard-coded 252
/// is only correct for daily bars, so the factor is derived from the interval
/// the caller actually requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesInterval {
    Daily,
    Weekly,
    Hourly,
}

impl Default for SeriesInterval {
    fn default() -> Self {
        Self::Daily
    }
}

impl SeriesInterval {
    /// Number of periods of this interval in one trading year.
    ///
    /// Daily uses the 252-trading-day convention; hourly assumes 6.5 trading
    /// hours per day (252 * 6.5 = 1638).
    pub fn periods_per_year(self) -> f64 {
        match self {
            Self::Daily => 252.0,
            Self::Weekly => 52.0,
            Self::Hourly => 1638.0,
        }
    }
}

impl std::fmt::Display for SeriesInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Hourly => write!(f, "hourly"),
        }
    }
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Top-level configuration for the statistics engine.
///
/// Every field has a serde default so that older JSON files missing new fields
/// will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // --- Map stage -----------------------------------------------------------

    /// Upper bound on the map-stage worker pool.  The effective worker count
    /// is `min(available_parallelism, worker_cap)`, never below 1.
    #[serde(default = "default_worker_cap")]
    pub worker_cap: usize,

    // --- Series semantics ----------------------------------------------------

    /// Sampling interval of the input series; drives volatility annualization.
    #[serde(default)]
    pub interval: SeriesInterval,

    // --- Indicator look-back periods ----------------------------------------

    /// RSI averaging window.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Bollinger middle-band SMA window.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Bollinger band width in standard deviations.
    #[serde(default = "default_bollinger_num_std")]
    pub bollinger_num_std: f64,

    /// MACD fast EMA span.
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// MACD slow EMA span.
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// MACD signal-line EMA span.
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_cap: default_worker_cap(),
            interval: SeriesInterval::Daily,
            rsi_period: default_rsi_period(),
            bollinger_period: default_bollinger_period(),
            bollinger_num_std: default_bollinger_num_std(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            worker_cap = config.worker_cap,
            interval = %config.interval,
            "engine config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise engine config to JSON")?;

        // Atomic write: write to a temporary sibling file, then rename.
        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "engine config saved (atomic)");

        Ok(())
    }
}
