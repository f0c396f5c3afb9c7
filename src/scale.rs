//! Axis scales and limits.

use crate::error::{PlotError, Result};

/// Axis scale type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    /// Linear scaling.
    #[default]
    Linear,
    /// Base-10 logarithmic scaling.
    Logarithmic,
}

impl Scale {
    /// Check whether the given limits can be used with this scale.
    pub fn valid_limits(self, limits: Limits) -> bool {
        match self {
            Self::Linear => true,
            Self::Logarithmic => limits.lo() > 0.0 && limits.hi() > 0.0,
        }
    }

    /// Whether this is the logarithmic scale.
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Self::Logarithmic)
    }
}

/// Axis limits with direction.
///
/// `hi < lo` is allowed and displays the axis inverted, so the endpoints
/// are kept exactly as set; sorting them would lose the direction. Both
/// endpoints must be finite and distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    lo: f64,
    hi: f64,
}

impl Limits {
    /// Fallback range applied when a logarithmic axis receives limits that
    /// are not strictly positive.
    pub const LOG_FALLBACK: Self = Self { lo: 0.1, hi: 10.0 };

    /// Create limits from two finite, distinct endpoints.
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo == hi {
            return Err(PlotError::InvalidLimits { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower (first) endpoint.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper (second) endpoint.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Signed span `hi - lo`.
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Smaller endpoint.
    pub fn min(&self) -> f64 {
        self.lo.min(self.hi)
    }

    /// Larger endpoint.
    pub fn max(&self) -> f64 {
        self.lo.max(self.hi)
    }

    /// Whether the limits run high-to-low.
    pub fn is_inverted(&self) -> bool {
        self.hi < self.lo
    }

    /// Direction-aware containment check.
    pub fn contains(&self, value: f64) -> bool {
        if self.hi >= self.lo {
            value >= self.lo && value <= self.hi
        } else {
            value <= self.lo && value >= self.hi
        }
    }
}

/// Substitute the documented fallback range when `limits` cannot be used
/// with `scale`, warning through `tracing`.
///
/// Applied at construction time and on scale switches; plain limit setters
/// reject invalid input instead.
pub(crate) fn sanitize_log_limits(limits: Limits, scale: Scale) -> Limits {
    if scale.valid_limits(limits) {
        limits
    } else {
        tracing::warn!(
            lo = limits.lo(),
            hi = limits.hi(),
            "limits are not allowed in logarithmic scale, falling back to (0.1, 10)"
        );
        Limits::LOG_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_reject_degenerate_input() {
        assert!(Limits::new(1.0, 1.0).is_err());
        assert!(Limits::new(f64::NAN, 1.0).is_err());
        assert!(Limits::new(0.0, f64::INFINITY).is_err());
        assert!(Limits::new(0.0, 10.0).is_ok());
    }

    #[test]
    fn limits_preserve_direction() {
        let inverted = Limits::new(10.0, 0.0).unwrap();
        assert!(inverted.is_inverted());
        assert_eq!(inverted.min(), 0.0);
        assert_eq!(inverted.max(), 10.0);
        assert_eq!(inverted.span(), -10.0);
        assert!(inverted.contains(5.0));
        assert!(!inverted.contains(11.0));
    }

    #[test]
    fn log_scale_requires_positive_limits() {
        let positive = Limits::new(0.1, 100.0).unwrap();
        let mixed = Limits::new(-1.0, 10.0).unwrap();
        assert!(Scale::Logarithmic.valid_limits(positive));
        assert!(!Scale::Logarithmic.valid_limits(mixed));
        assert!(Scale::Linear.valid_limits(mixed));
    }

    #[test]
    fn sanitize_substitutes_fallback_for_bad_log_limits() {
        let mixed = Limits::new(-1.0, 10.0).unwrap();
        let sanitized = sanitize_log_limits(mixed, Scale::Logarithmic);
        assert_eq!(sanitized, Limits::LOG_FALLBACK);

        let kept = sanitize_log_limits(mixed, Scale::Linear);
        assert_eq!(kept, mixed);
    }
}
