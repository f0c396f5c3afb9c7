//! Error types for the plotting core.

use thiserror::Error;

/// Errors reported when configuring axes, series or transforms.
///
/// Every fallible setter leaves the previous valid state untouched when it
/// returns an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Axis limits are degenerate (equal endpoints) or not finite.
    #[error("invalid axis limits ({lo}, {hi}): endpoints must be finite and distinct")]
    InvalidLimits { lo: f64, hi: f64 },

    /// Logarithmic scale requires strictly positive limits.
    #[error("limits ({lo}, {hi}) are not allowed in logarithmic scale")]
    NonPositiveLogLimits { lo: f64, hi: f64 },

    /// Viewport dimensions must be strictly positive and finite.
    #[error("invalid viewport dimensions {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },

    /// Axis extent must be strictly positive and finite.
    #[error("invalid axis extent {0}")]
    InvalidExtent(f64),

    /// Fixed tick labels must match the current number of ticks.
    #[error("expected {expected} tick labels, got {actual}")]
    TickLabelCountMismatch { expected: usize, actual: usize },
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, PlotError>;
