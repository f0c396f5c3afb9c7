//! Coordinate transforms between data values and viewport positions.

use crate::error::{PlotError, Result};
use crate::scale::{Limits, Scale};

/// Axis orientation inside the viewport.
///
/// Horizontal axes map along `[0, width]`. Vertical axes map along
/// `[-height, 0]`: positions are negated so that larger data values sit
/// closer to the top of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Along the viewport width.
    Horizontal,
    /// Along the viewport height, negated.
    Vertical,
}

/// Bidirectional value/position transform for one axis.
///
/// All configuration is passed in explicitly; a mapper holds no shared or
/// global state and is cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    limits: Limits,
    scale: Scale,
    extent: f64,
    orientation: Orientation,
}

impl Mapper {
    /// Create a mapper, validating the extent and the scale/limit pairing.
    pub fn new(limits: Limits, scale: Scale, extent: f64, orientation: Orientation) -> Result<Self> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(PlotError::InvalidExtent(extent));
        }
        if !scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        Ok(Self::from_parts(limits, scale, extent, orientation))
    }

    /// Build a mapper from already-validated parts.
    pub(crate) fn from_parts(
        limits: Limits,
        scale: Scale,
        extent: f64,
        orientation: Orientation,
    ) -> Self {
        Self {
            limits,
            scale,
            extent,
            orientation,
        }
    }

    /// Axis limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Axis scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Axis extent in viewport units.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Axis orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Replace the limits, keeping scale and extent.
    pub fn set_limits(&mut self, limits: Limits) -> Result<()> {
        if !self.scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.limits = limits;
        Ok(())
    }

    /// Replace the scale, keeping limits and extent.
    pub fn set_scale(&mut self, scale: Scale) -> Result<()> {
        if !scale.valid_limits(self.limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: self.limits.lo(),
                hi: self.limits.hi(),
            });
        }
        self.scale = scale;
        Ok(())
    }

    /// Replace the extent.
    pub fn set_extent(&mut self, extent: f64) -> Result<()> {
        if !(extent.is_finite() && extent > 0.0) {
            return Err(PlotError::InvalidExtent(extent));
        }
        self.extent = extent;
        Ok(())
    }

    fn signed_extent(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.extent,
            Orientation::Vertical => -self.extent,
        }
    }

    /// Map a data value to its viewport position.
    ///
    /// On a logarithmic axis a non-positive value has no position; the NaN
    /// that comes out of the logarithm marks any point built from it as
    /// invalid downstream.
    pub fn to_position(&self, value: f64) -> f64 {
        let limits = self.limits;
        match self.scale {
            Scale::Linear => self.signed_extent() * (value - limits.lo()) / limits.span(),
            Scale::Logarithmic => {
                self.signed_extent() * (value / limits.lo()).ln() / (limits.hi() / limits.lo()).ln()
            }
        }
    }

    /// Map a viewport position back to its data value.
    pub fn to_value(&self, position: f64) -> f64 {
        let limits = self.limits;
        match self.scale {
            Scale::Linear => limits.lo() + limits.span() * position / self.signed_extent(),
            Scale::Logarithmic => (limits.lo().ln()
                + (limits.hi() / limits.lo()).ln() * position / self.signed_extent())
            .exp(),
        }
    }

    /// Map a batch of values, computing the scale factor once.
    ///
    /// Behaviorally identical to calling [`Mapper::to_position`] per
    /// element.
    pub fn to_positions(&self, values: &[f64]) -> Vec<f64> {
        let limits = self.limits;
        match self.scale {
            Scale::Linear => {
                let factor = self.signed_extent() / limits.span();
                values.iter().map(|&v| (v - limits.lo()) * factor).collect()
            }
            Scale::Logarithmic => {
                let factor = self.signed_extent() / (limits.hi() / limits.lo()).ln();
                values
                    .iter()
                    .map(|&v| (v / limits.lo()).ln() * factor)
                    .collect()
            }
        }
    }
}
