// =============================================================================
// Engine error taxonomy
// =============================================================================
//
// Two failure classes, both surfaced to the immediate caller of the compute
// entry point:
//
//   Input       — the price series or a request parameter violates the input
//                 contract; detected before any computation starts.
//   Computation — a map-stage worker failed; the whole call fails and every
//                 partial result is discarded.
//
// Undefined values (leading rolling-window entries, 0/0 RSI) are NOT errors:
// they are NaN sentinels in the output series and must stay that way.
// =============================================================================

use thiserror::Error;

/// Error type for every fallible operation in the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The price series or a request parameter violates the input contract.
    #[error("invalid input: {0}")]
    Input(String),

    /// A parallel worker failed during the map stage.
    #[error("computation failed: {0}")]
    Computation(String),
}

impl EngineError {
    /// Shorthand constructor for input-contract violations.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Shorthand constructor for map-stage failures.
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::Computation(msg.into())
    }
}
