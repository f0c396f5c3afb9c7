//! Axis model: tick values, positions, labels and visibility.

use crate::error::{PlotError, Result};
use crate::geom::Viewport;
use crate::scale::{Limits, Scale, sanitize_log_limits};
use crate::ticks::{self, Tick};
use crate::transform::{Mapper, Orientation};

/// Side of the plot box an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Horizontal axis along the bottom edge.
    Bottom,
    /// Horizontal axis along the top edge.
    Top,
    /// Vertical axis along the left edge.
    Left,
    /// Vertical axis along the right edge.
    Right,
}

impl AxisSide {
    /// Orientation of the mapped coordinate for this side.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Bottom | Self::Top => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }

    fn extent(self, viewport: Viewport) -> f64 {
        match self.orientation() {
            Orientation::Horizontal => viewport.width(),
            Orientation::Vertical => viewport.height(),
        }
    }
}

/// Default number of ticks requested on a linear axis.
const DEFAULT_TICK_COUNT: u32 = 5;

/// One axis of the plot.
///
/// Owns the limits, scale and tick-count hint, and recomputes tick values,
/// mapped positions, labels and visibility flags eagerly on every change.
/// Caller-supplied fixed ticks suppress regeneration until released.
#[derive(Debug, Clone)]
pub struct Axis {
    side: AxisSide,
    viewport: Viewport,
    limits: Limits,
    scale: Scale,
    tick_count: u32,
    fixed_ticks: bool,
    exponential_labels: bool,
    values: Vec<f64>,
    positions: Vec<f64>,
    labels: Vec<String>,
    inside: Vec<bool>,
}

impl Axis {
    /// Create an axis.
    ///
    /// A logarithmic axis whose limits are not strictly positive falls back
    /// to the documented `(0.1, 10)` range with a warning; the fallback
    /// immediately drives all derived state.
    pub fn new(side: AxisSide, viewport: Viewport, limits: Limits, scale: Scale) -> Self {
        let limits = sanitize_log_limits(limits, scale);
        let mut axis = Self {
            side,
            viewport,
            limits,
            scale,
            tick_count: DEFAULT_TICK_COUNT,
            fixed_ticks: false,
            exponential_labels: false,
            values: Vec::new(),
            positions: Vec::new(),
            labels: Vec::new(),
            inside: Vec::new(),
        };
        axis.regenerate();
        axis
    }

    /// Side of the plot box this axis is attached to.
    pub fn side(&self) -> AxisSide {
        self.side
    }

    /// Current limits.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Current scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Requested tick count for the linear scale.
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Whether caller-supplied fixed ticks are active.
    pub fn has_fixed_ticks(&self) -> bool {
        self.fixed_ticks
    }

    /// The value/position mapper for this axis.
    pub fn mapper(&self) -> Mapper {
        Mapper::from_parts(
            self.limits,
            self.scale,
            self.side.extent(self.viewport),
            self.side.orientation(),
        )
    }

    /// All ticks, including the ones outside the viewport.
    pub fn ticks(&self) -> Vec<Tick> {
        self.values
            .iter()
            .zip(&self.positions)
            .zip(&self.labels)
            .zip(&self.inside)
            .map(|(((&value, &position), label), &inside)| Tick {
                value,
                position,
                label: label.clone(),
                inside,
            })
            .collect()
    }

    /// Ticks currently inside the viewport.
    ///
    /// This is a read-time projection of [`Axis::ticks`]; fixed ticks are
    /// returned unfiltered.
    pub fn visible_ticks(&self) -> Vec<Tick> {
        if self.fixed_ticks {
            self.ticks()
        } else {
            self.ticks().into_iter().filter(|tick| tick.inside).collect()
        }
    }

    /// Tick values.
    pub fn tick_values(&self) -> &[f64] {
        &self.values
    }

    /// Mapped tick positions.
    pub fn tick_positions(&self) -> &[f64] {
        &self.positions
    }

    /// Replace the viewport and remap the tick positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_positions();
    }

    /// Replace the limits, regenerating ticks unless they are fixed.
    ///
    /// Limits that are not strictly positive on a logarithmic axis are
    /// rejected and the previous state is retained.
    pub fn set_limits(&mut self, limits: Limits) -> Result<()> {
        if !self.scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.limits = limits;
        self.regenerate();
        Ok(())
    }

    /// Pan the limits, shifting the existing tick lattice instead of
    /// recomputing it so the tick phase stays stable.
    ///
    /// Logarithmic axes regenerate fully: the decade lattice is absolute.
    pub fn move_limits(&mut self, limits: Limits) -> Result<()> {
        if !self.scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.limits = limits;

        if !self.fixed_ticks {
            self.values = match self.scale {
                Scale::Logarithmic => ticks::log_ticks(self.limits),
                Scale::Linear => ticks::moved_linear_ticks(&self.values, self.limits),
            };
            self.update_labels();
        }
        self.update_positions();
        Ok(())
    }

    /// Switch the scale, keeping the limits when they remain usable.
    ///
    /// Switching to logarithmic with non-positive limits applies the
    /// `(0.1, 10)` fallback with a warning.
    pub fn set_scale(&mut self, scale: Scale) {
        if scale == self.scale {
            return;
        }
        self.limits = sanitize_log_limits(self.limits, scale);
        self.scale = scale;
        self.regenerate();
    }

    /// Replace limits and scale together.
    ///
    /// The pair is validated as a whole; on rejection neither changes.
    pub fn set_limits_and_scale(&mut self, limits: Limits, scale: Scale) -> Result<()> {
        if !scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.limits = limits;
        self.scale = scale;
        self.regenerate();
        Ok(())
    }

    /// Change the requested tick count.
    ///
    /// Takes effect on linear axes, where it also releases fixed ticks;
    /// logarithmic axes only store the hint.
    pub fn set_tick_count(&mut self, count: u32) {
        self.tick_count = count;
        if !self.scale.is_logarithmic() {
            self.fixed_ticks = false;
            self.regenerate();
        }
    }

    /// Supply explicit tick values, suppressing automatic regeneration
    /// until [`Axis::use_automatic_ticks`] is called.
    pub fn set_ticks(&mut self, values: &[f64]) {
        self.fixed_ticks = true;
        self.values = values.to_vec();
        self.update_labels();
        self.update_positions();
    }

    /// Supply explicit tick labels for the current ticks.
    ///
    /// The label count must match the tick count; fixed mode is implied.
    pub fn set_tick_labels(&mut self, labels: Vec<String>) -> Result<()> {
        if labels.len() != self.values.len() {
            return Err(PlotError::TickLabelCountMismatch {
                expected: self.values.len(),
                actual: labels.len(),
            });
        }
        self.fixed_ticks = true;
        self.labels = labels;
        Ok(())
    }

    /// Release fixed ticks and regenerate automatically.
    pub fn use_automatic_ticks(&mut self) {
        if self.fixed_ticks {
            self.fixed_ticks = false;
            self.regenerate();
        }
    }

    /// Toggle `1e<exp>` notation for decade labels.
    pub fn set_exponential_labels(&mut self, exponential: bool) {
        if exponential != self.exponential_labels {
            self.exponential_labels = exponential;
            if !self.fixed_ticks {
                self.update_labels();
            }
        }
    }

    fn regenerate(&mut self) {
        if !self.fixed_ticks {
            self.values = ticks::ticks_for(self.limits, self.scale, self.tick_count);
            self.update_labels();
        }
        self.update_positions();
    }

    fn update_labels(&mut self) {
        self.labels = self
            .values
            .iter()
            .map(|&value| ticks::tick_label(value, self.scale, self.exponential_labels))
            .collect();
    }

    fn update_positions(&mut self) {
        let mapper = self.mapper();
        if self.scale.is_logarithmic() {
            // Non-positive values have no logarithm; park them just outside
            // the box instead.
            let parked = self.parked_position();
            self.positions = self
                .values
                .iter()
                .map(|&value| if value > 0.0 { mapper.to_position(value) } else { parked })
                .collect();
        } else {
            self.positions = mapper.to_positions(&self.values);
        }
        self.inside = self
            .positions
            .iter()
            .map(|&position| self.position_inside(position))
            .collect();
    }

    fn parked_position(&self) -> f64 {
        match self.side.orientation() {
            Orientation::Horizontal => -1.0,
            Orientation::Vertical => 1.0,
        }
    }

    fn position_inside(&self, position: f64) -> bool {
        match self.side.orientation() {
            Orientation::Horizontal => position >= 0.0 && position <= self.viewport.width(),
            Orientation::Vertical => -position >= 0.0 && -position <= self.viewport.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport() -> Viewport {
        Viewport::new(450.0, 300.0).unwrap()
    }

    fn limits(lo: f64, hi: f64) -> Limits {
        Limits::new(lo, hi).unwrap()
    }

    #[test]
    fn linear_axis_produces_labeled_ticks() {
        let axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        let ticks = axis.visible_ticks();

        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].value, 0.0);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[5].value, 100.0);
        assert_relative_eq!(ticks[5].position, 450.0);
        assert!(ticks.iter().all(|tick| tick.inside));
    }

    #[test]
    fn vertical_axis_maps_to_negative_positions() {
        let axis = Axis::new(AxisSide::Left, viewport(), limits(0.0, 100.0), Scale::Linear);
        let ticks = axis.visible_ticks();

        assert_relative_eq!(ticks[0].position, 0.0);
        assert_relative_eq!(ticks[5].position, -300.0);
    }

    #[test]
    fn log_axis_labels_decades_only() {
        let axis = Axis::new(
            AxisSide::Bottom,
            viewport(),
            limits(1.0, 1000.0),
            Scale::Logarithmic,
        );
        let ticks = axis.ticks();

        assert_eq!(ticks.len(), 28);
        let labeled: Vec<&Tick> = ticks.iter().filter(|tick| !tick.label.is_empty()).collect();
        assert_eq!(labeled.len(), 4);
        assert_eq!(labeled[0].label, "1");
        assert_eq!(labeled[3].label, "1000");
    }

    #[test]
    fn invalid_log_limits_fall_back() {
        let axis = Axis::new(
            AxisSide::Bottom,
            viewport(),
            limits(-1.0, 10.0),
            Scale::Logarithmic,
        );
        assert_eq!(axis.limits(), Limits::LOG_FALLBACK);
        // Derived state is computed from the fallback, not the bad limits.
        assert!(axis.ticks().iter().all(|tick| tick.value > 0.0));
    }

    #[test]
    fn rejected_limits_keep_previous_state() {
        let mut axis = Axis::new(
            AxisSide::Bottom,
            viewport(),
            limits(1.0, 1000.0),
            Scale::Logarithmic,
        );
        let before = axis.tick_values().to_vec();

        assert!(axis.set_limits(limits(-5.0, 5.0)).is_err());
        assert_eq!(axis.limits(), limits(1.0, 1000.0));
        assert_eq!(axis.tick_values(), before);
    }

    #[test]
    fn switching_to_log_with_bad_limits_falls_back() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(-50.0, 50.0), Scale::Linear);
        axis.set_scale(Scale::Logarithmic);

        assert_eq!(axis.scale(), Scale::Logarithmic);
        assert_eq!(axis.limits(), Limits::LOG_FALLBACK);
    }

    #[test]
    fn fixed_ticks_survive_limit_changes() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        axis.set_ticks(&[0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(axis.has_fixed_ticks());

        axis.set_limits(limits(0.0, 50.0)).unwrap();
        assert_eq!(axis.tick_values(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
        // The out-of-range ticks are reported but flagged outside.
        let ticks = axis.ticks();
        assert!(!ticks[3].inside);

        axis.use_automatic_ticks();
        assert!(axis.tick_values().iter().all(|&v| (0.0..=50.0).contains(&v)));
    }

    #[test]
    fn fixed_labels_must_match_tick_count() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        axis.set_ticks(&[0.0, 50.0, 100.0]);

        assert!(axis.set_tick_labels(vec!["low".into(), "high".into()]).is_err());
        assert!(
            axis.set_tick_labels(vec!["low".into(), "mid".into(), "high".into()])
                .is_ok()
        );
        assert_eq!(axis.ticks()[1].label, "mid");
    }

    #[test]
    fn panning_keeps_tick_phase() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        axis.move_limits(limits(7.0, 107.0)).unwrap();
        assert_eq!(axis.tick_values(), &[20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn tick_count_zero_clears_linear_ticks() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        axis.set_tick_count(0);
        assert!(axis.ticks().is_empty());
    }

    #[test]
    fn visible_ticks_filter_is_a_projection() {
        let mut axis = Axis::new(AxisSide::Bottom, viewport(), limits(0.0, 100.0), Scale::Linear);
        axis.set_limits(limits(0.0, 50.0)).unwrap();

        // All ticks are retained internally; visibility filters at read time.
        assert_eq!(axis.ticks().len(), axis.visible_ticks().len());
        for tick in axis.visible_ticks() {
            assert!(tick.inside);
        }
    }
}
