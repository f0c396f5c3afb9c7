//! Series geometry: mapped points, visibility and drawable shapes.
//!
//! A series owns its data points and recomputes their mapped positions and
//! inside/outside flags wholesale on every limit, scale, viewport or point
//! change. Mapped points are owned values, never views of the data points.

use crate::clip::{Clipper, Cuts};
use crate::error::{PlotError, Result};
use crate::geom::{Point, PointsArray, Viewport};
use crate::scale::{Limits, Scale, sanitize_log_limits};
use crate::transform::{Mapper, Orientation};

/// Squared distance in viewport units within which a point responds to hit
/// testing (a 5 pixel radius).
const HIT_RADIUS_SQUARED: f64 = 25.0;

/// A straight stroke between two mapped positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start position in viewport space.
    pub start: [f64; 2],
    /// End position in viewport space.
    pub end: [f64; 2],
}

/// Tags carried while assembling filled-contour shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeTag {
    Normal,
    Projection,
    Cut,
    Extreme,
}

#[derive(Debug, Clone, Copy)]
struct ShapeVertex {
    x: f64,
    y: f64,
    tag: ShapeTag,
}

/// Geometry for one data series inside a viewport.
#[derive(Debug, Clone)]
pub struct SeriesGeometry {
    viewport: Viewport,
    x_limits: Limits,
    y_limits: Limits,
    x_scale: Scale,
    y_scale: Scale,
    points: PointsArray,
    mapped: PointsArray,
    inside: Vec<bool>,
}

impl SeriesGeometry {
    /// Create an empty series.
    ///
    /// Logarithmic limits that are not strictly positive fall back to the
    /// documented `(0.1, 10)` range with a warning, per axis.
    pub fn new(
        viewport: Viewport,
        x_limits: Limits,
        y_limits: Limits,
        x_scale: Scale,
        y_scale: Scale,
    ) -> Self {
        Self {
            viewport,
            x_limits: sanitize_log_limits(x_limits, x_scale),
            y_limits: sanitize_log_limits(y_limits, y_scale),
            x_scale,
            y_scale,
            points: PointsArray::new(),
            mapped: PointsArray::new(),
            inside: Vec::new(),
        }
    }

    /// The data points.
    pub fn points(&self) -> &PointsArray {
        &self.points
    }

    /// The points mapped to viewport space, one per data point.
    ///
    /// Points whose mapping is undefined (non-finite input, or a
    /// non-positive value on a logarithmic axis) are flagged invalid.
    pub fn mapped_points(&self) -> &PointsArray {
        &self.mapped
    }

    /// Inside-the-viewport flag per point.
    pub fn inside_flags(&self) -> &[bool] {
        &self.inside
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Horizontal limits.
    pub fn x_limits(&self) -> Limits {
        self.x_limits
    }

    /// Vertical limits.
    pub fn y_limits(&self) -> Limits {
        self.y_limits
    }

    /// Horizontal scale.
    pub fn x_scale(&self) -> Scale {
        self.x_scale
    }

    /// Vertical scale.
    pub fn y_scale(&self) -> Scale {
        self.y_scale
    }

    /// The mapper for the horizontal axis.
    pub fn x_mapper(&self) -> Mapper {
        Mapper::from_parts(
            self.x_limits,
            self.x_scale,
            self.viewport.width(),
            Orientation::Horizontal,
        )
    }

    /// The mapper for the vertical axis.
    pub fn y_mapper(&self) -> Mapper {
        Mapper::from_parts(
            self.y_limits,
            self.y_scale,
            self.viewport.height(),
            Orientation::Vertical,
        )
    }

    /// The clipper for the current viewport.
    pub fn clipper(&self) -> Clipper {
        Clipper::new(self.viewport)
    }

    /// Replace the data points.
    pub fn set_points(&mut self, points: PointsArray) {
        self.points = points;
        self.remap();
    }

    /// Append a data point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.remap();
    }

    /// Replace the viewport and remap every point.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.remap();
    }

    /// Replace the horizontal limits.
    ///
    /// Rejected when the horizontal scale is logarithmic and the limits are
    /// not strictly positive; the previous state is retained.
    pub fn set_x_limits(&mut self, limits: Limits) -> Result<()> {
        if !self.x_scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.x_limits = limits;
        self.remap();
        Ok(())
    }

    /// Replace the vertical limits.
    pub fn set_y_limits(&mut self, limits: Limits) -> Result<()> {
        if !self.y_scale.valid_limits(limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: limits.lo(),
                hi: limits.hi(),
            });
        }
        self.y_limits = limits;
        self.remap();
        Ok(())
    }

    /// Replace both limit pairs; neither changes on rejection.
    pub fn set_limits(&mut self, x_limits: Limits, y_limits: Limits) -> Result<()> {
        if !self.x_scale.valid_limits(x_limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: x_limits.lo(),
                hi: x_limits.hi(),
            });
        }
        if !self.y_scale.valid_limits(y_limits) {
            return Err(PlotError::NonPositiveLogLimits {
                lo: y_limits.lo(),
                hi: y_limits.hi(),
            });
        }
        self.x_limits = x_limits;
        self.y_limits = y_limits;
        self.remap();
        Ok(())
    }

    /// Switch the horizontal scale, falling back to `(0.1, 10)` when the
    /// current limits cannot be used logarithmically.
    pub fn set_x_scale(&mut self, scale: Scale) {
        if scale == self.x_scale {
            return;
        }
        self.x_limits = sanitize_log_limits(self.x_limits, scale);
        self.x_scale = scale;
        self.remap();
    }

    /// Switch the vertical scale.
    pub fn set_y_scale(&mut self, scale: Scale) {
        if scale == self.y_scale {
            return;
        }
        self.y_limits = sanitize_log_limits(self.y_limits, scale);
        self.y_scale = scale;
        self.remap();
    }

    /// Map a single data point to viewport space.
    pub fn map_point(&self, point: &Point) -> Point {
        Point::with_label(
            self.x_mapper().to_position(point.x()),
            self.y_mapper().to_position(point.y()),
            point.label(),
        )
    }

    /// Map a viewport position back to data values.
    pub fn position_to_values(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_mapper().to_value(x), self.y_mapper().to_value(y))
    }

    fn remap(&mut self) {
        let xs: Vec<f64> = self.points.iter().map(Point::x).collect();
        let ys: Vec<f64> = self.points.iter().map(Point::y).collect();
        let x_positions = self.x_mapper().to_positions(&xs);
        let y_positions = self.y_mapper().to_positions(&ys);

        let mut mapped = PointsArray::with_capacity(self.points.len());
        for ((point, &x), &y) in self.points.iter().zip(&x_positions).zip(&y_positions) {
            mapped.push(Point::with_label(x, y, point.label()));
        }
        self.inside = mapped
            .iter()
            .map(|point| point.is_valid() && self.viewport.contains(point.x(), point.y()))
            .collect();
        self.mapped = mapped;
    }

    /// Drawable strokes connecting consecutive points, clipped to the
    /// viewport.
    ///
    /// Invalid points break connectivity: the segments touching them are
    /// skipped while indices stay stable.
    pub fn segments(&self) -> Vec<Segment> {
        let mapped = self.mapped.points();
        let mut segments = Vec::new();
        if mapped.len() < 2 {
            return segments;
        }

        let clipper = self.clipper();
        for i in 0..mapped.len() - 1 {
            let (a, b) = (&mapped[i], &mapped[i + 1]);
            if self.inside[i] && self.inside[i + 1] {
                segments.push(Segment {
                    start: [a.x(), a.y()],
                    end: [b.x(), b.y()],
                });
            } else if a.is_valid() && b.is_valid() {
                let cuts = clipper.segment_cuts(a, b);
                if self.inside[i] {
                    if let Some(cut) = cuts.first() {
                        segments.push(Segment {
                            start: [a.x(), a.y()],
                            end: cut,
                        });
                    }
                } else if self.inside[i + 1] {
                    if let Some(cut) = cuts.first() {
                        segments.push(Segment {
                            start: cut,
                            end: [b.x(), b.y()],
                        });
                    }
                } else if let Cuts::Pair(entry, exit) = cuts {
                    segments.push(Segment {
                        start: entry,
                        end: exit,
                    });
                }
            }
        }
        segments
    }

    /// The visible stroke between two arbitrary data points, if any.
    pub fn segment_between(&self, a: &Point, b: &Point) -> Option<Segment> {
        let mapped_a = self.map_point(a);
        let mapped_b = self.map_point(b);
        if !mapped_a.is_valid() || !mapped_b.is_valid() {
            return None;
        }

        let inside_a = self.viewport.contains(mapped_a.x(), mapped_a.y());
        let inside_b = self.viewport.contains(mapped_b.x(), mapped_b.y());
        if inside_a && inside_b {
            return Some(Segment {
                start: [mapped_a.x(), mapped_a.y()],
                end: [mapped_b.x(), mapped_b.y()],
            });
        }

        let cuts = self.clipper().segment_cuts(&mapped_a, &mapped_b);
        if inside_a {
            cuts.first().map(|cut| Segment {
                start: [mapped_a.x(), mapped_a.y()],
                end: cut,
            })
        } else if inside_b {
            cuts.first().map(|cut| Segment {
                start: cut,
                end: [mapped_b.x(), mapped_b.y()],
            })
        } else if let Cuts::Pair(entry, exit) = cuts {
            Some(Segment {
                start: entry,
                end: exit,
            })
        } else {
            None
        }
    }

    /// The visible stroke of the line `y = slope * x + intercept`, stated
    /// in the current scales (logarithmic axes interpret the relation in
    /// log10 space).
    pub fn sloped_line_segment(&self, slope: f64, intercept: f64) -> Option<Segment> {
        let y_at = |x: f64| -> f64 {
            match (self.x_scale, self.y_scale) {
                (Scale::Logarithmic, Scale::Logarithmic) => {
                    10.0_f64.powf(slope * x.log10() + intercept)
                }
                (Scale::Logarithmic, Scale::Linear) => slope * x.log10() + intercept,
                (Scale::Linear, Scale::Logarithmic) => 10.0_f64.powf(slope * x + intercept),
                (Scale::Linear, Scale::Linear) => slope * x + intercept,
            }
        };
        let lo = self.x_limits.lo();
        let hi = self.x_limits.hi();
        self.segment_between(&Point::new(lo, y_at(lo)), &Point::new(hi, y_at(hi)))
    }

    /// Crop a closed polygon, given in data values, to the viewport.
    ///
    /// Invalid points are dropped before clipping.
    pub fn clip_polygon(&self, polygon: &PointsArray) -> PointsArray {
        if polygon.len() <= 2 {
            return PointsArray::new();
        }
        let mut mapped: Vec<Point> = polygon.iter().map(|point| self.map_point(point)).collect();
        mapped.retain(Point::is_valid);
        self.clipper().clip_polygon(&mapped)
    }

    /// The data point closest to a viewport position, within a 5 pixel
    /// radius. The queried position must itself be inside the viewport.
    pub fn point_at(&self, x: f64, y: f64) -> Option<&Point> {
        if !self.viewport.contains(x, y) {
            return None;
        }

        let mut best: Option<usize> = None;
        let mut best_distance = HIT_RADIUS_SQUARED;
        for (i, mapped) in self.mapped.iter().enumerate() {
            if !self.inside[i] {
                continue;
            }
            let distance = (mapped.x() - x).powi(2) + (mapped.y() - y).powi(2);
            if distance < best_distance {
                best_distance = distance;
                best = Some(i);
            }
        }
        best.and_then(|i| self.points.get(i))
    }

    /// Horizontal limits derived from the valid points, padded by 10%
    /// (geometrically on a logarithmic axis).
    ///
    /// Points outside `constrain_y`, and non-positive values on a
    /// logarithmic axis, are excluded. Returns `None` when no usable span
    /// remains, letting the caller keep its current limits.
    pub fn auto_x_limits(&self, constrain_y: Option<Limits>) -> Option<Limits> {
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        for point in self.points.iter().filter(|point| point.is_valid()) {
            if let Some(y_limits) = constrain_y {
                if !y_limits.contains(point.y()) {
                    continue;
                }
            }
            if self.x_scale.is_logarithmic() && point.x() <= 0.0 {
                continue;
            }
            lo = lo.min(point.x());
            hi = hi.max(point.x());
        }
        pad_limits(lo, hi, self.x_scale)
    }

    /// Vertical limits derived from the valid points; see
    /// [`SeriesGeometry::auto_x_limits`].
    pub fn auto_y_limits(&self, constrain_x: Option<Limits>) -> Option<Limits> {
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        for point in self.points.iter().filter(|point| point.is_valid()) {
            if let Some(x_limits) = constrain_x {
                if !x_limits.contains(point.x()) {
                    continue;
                }
            }
            if self.y_scale.is_logarithmic() && point.y() <= 0.0 {
                continue;
            }
            lo = lo.min(point.y());
            hi = hi.max(point.y());
        }
        pad_limits(lo, hi, self.y_scale)
    }

    /// Shape of the filled area between the series and a horizontal
    /// reference value, clipped to the viewport.
    ///
    /// Out-of-range points whose x still falls over the box are projected
    /// onto the nearer horizontal edge; the shape closes along the mapped
    /// reference, clamped to the box when it falls outside. On a
    /// logarithmic vertical axis a non-positive reference clamps to the
    /// nearest limit.
    pub fn horizontal_shape(&self, reference: f64) -> PointsArray {
        let width = self.viewport.width();
        let height = self.viewport.height();

        let (shape, first_index, last_index) = self.collect_shape_vertices(|mapped| {
            if mapped.x() >= 0.0 && mapped.x() <= width {
                let y = if -mapped.y() < 0.0 { 0.0 } else { -height };
                Some((mapped.x(), y))
            } else {
                None
            }
        });
        if shape.is_empty() {
            return PointsArray::new();
        }

        let points = self.mapped.points();
        let count = points.len();

        // First and last shape vertices move to the nearer vertical edge
        // when the series continues beyond the box.
        let mut start = shape[0];
        if start.x != 0.0 && start.x != width {
            if start.tag == ShapeTag::Cut {
                start.x = if points[first_index].x() < 0.0 { 0.0 } else { width };
                start.tag = ShapeTag::Extreme;
            } else if first_index != 0 {
                let mut previous = first_index - 1;
                while previous > 0 && !points[previous].is_valid() {
                    previous -= 1;
                }
                if points[previous].is_valid() {
                    start.x = if points[previous].x() < 0.0 { 0.0 } else { width };
                    start.tag = ShapeTag::Extreme;
                }
            }
        }

        let mut end = shape[shape.len() - 1];
        if end.x != 0.0 && end.x != width && last_index != count - 1 {
            let mut next = last_index + 1;
            while next < count - 1 && !points[next].is_valid() {
                next += 1;
            }
            if points[next].is_valid() {
                end.x = if points[next].x() < 0.0 { 0.0 } else { width };
                end.tag = ShapeTag::Extreme;
            }
        }

        let mut result: PointsArray = shape
            .iter()
            .map(|vertex| Point::new(vertex.x, vertex.y))
            .collect();
        if end.tag == ShapeTag::Extreme {
            result.add(end.x, end.y);
        }

        // Close the shape along the reference value.
        let mut reference = reference;
        if self.y_scale.is_logarithmic() && reference <= 0.0 {
            reference = self.y_limits.min();
        }
        let reference_position = self.y_mapper().to_position(reference);
        if -reference_position < 0.0 {
            result.add(end.x, 0.0);
            result.add(start.x, 0.0);
        } else if -reference_position > height {
            result.add(end.x, -height);
            result.add(start.x, -height);
        } else {
            result.add(end.x, reference_position);
            result.add(start.x, reference_position);
        }

        if start.tag == ShapeTag::Extreme {
            result.add(start.x, start.y);
        }
        result
    }

    /// Shape of the filled area between the series and a vertical
    /// reference value; the mirror of
    /// [`SeriesGeometry::horizontal_shape`]. On a logarithmic horizontal
    /// axis a non-positive reference clamps to the nearest limit.
    pub fn vertical_shape(&self, reference: f64) -> PointsArray {
        let width = self.viewport.width();
        let height = self.viewport.height();

        let (shape, first_index, last_index) = self.collect_shape_vertices(|mapped| {
            if -mapped.y() >= 0.0 && -mapped.y() <= height {
                let x = if mapped.x() < 0.0 { 0.0 } else { width };
                Some((x, mapped.y()))
            } else {
                None
            }
        });
        if shape.is_empty() {
            return PointsArray::new();
        }

        let points = self.mapped.points();
        let count = points.len();

        let mut start = shape[0];
        if start.y != 0.0 && start.y != -height {
            if start.tag == ShapeTag::Cut {
                start.y = if -points[first_index].y() < 0.0 { 0.0 } else { -height };
                start.tag = ShapeTag::Extreme;
            } else if first_index != 0 {
                let mut previous = first_index - 1;
                while previous > 0 && !points[previous].is_valid() {
                    previous -= 1;
                }
                if points[previous].is_valid() {
                    start.y = if -points[previous].y() < 0.0 { 0.0 } else { -height };
                    start.tag = ShapeTag::Extreme;
                }
            }
        }

        let mut end = shape[shape.len() - 1];
        if end.y != 0.0 && end.y != -height && last_index != count - 1 {
            let mut next = last_index + 1;
            while next < count - 1 && !points[next].is_valid() {
                next += 1;
            }
            if points[next].is_valid() {
                end.y = if -points[next].y() < 0.0 { 0.0 } else { -height };
                end.tag = ShapeTag::Extreme;
            }
        }

        let mut result: PointsArray = shape
            .iter()
            .map(|vertex| Point::new(vertex.x, vertex.y))
            .collect();
        if end.tag == ShapeTag::Extreme {
            result.add(end.x, end.y);
        }

        let mut reference = reference;
        if self.x_scale.is_logarithmic() && reference <= 0.0 {
            reference = self.x_limits.min();
        }
        let reference_position = self.x_mapper().to_position(reference);
        if reference_position < 0.0 {
            result.add(0.0, end.y);
            result.add(0.0, start.y);
        } else if reference_position > width {
            result.add(width, end.y);
            result.add(width, start.y);
        } else {
            result.add(reference_position, end.y);
            result.add(reference_position, start.y);
        }

        if start.tag == ShapeTag::Extreme {
            result.add(start.x, start.y);
        }
        result
    }

    /// Walk the mapped points collecting inside vertices, the projections
    /// produced by `project`, and the boundary cuts toward the next valid
    /// point. Returns the vertices plus the indices of the first and last
    /// contributing points.
    fn collect_shape_vertices(
        &self,
        project: impl Fn(&Point) -> Option<(f64, f64)>,
    ) -> (Vec<ShapeVertex>, usize, usize) {
        let points = self.mapped.points();
        let count = points.len();
        let clipper = self.clipper();
        let mut shape = Vec::with_capacity(2 * count);
        let mut first_index = 0;
        let mut last_index = 0;
        let mut any = false;

        for i in 0..count {
            if !points[i].is_valid() {
                continue;
            }
            let mut added = false;

            if self.inside[i] {
                shape.push(ShapeVertex {
                    x: points[i].x(),
                    y: points[i].y(),
                    tag: ShapeTag::Normal,
                });
                added = true;
            } else if let Some((x, y)) = project(&points[i]) {
                shape.push(ShapeVertex {
                    x,
                    y,
                    tag: ShapeTag::Projection,
                });
                added = true;
            }

            // Splice in the boundary cuts toward the next valid point.
            let mut next = i + 1;
            while next < count.saturating_sub(1) && !points[next].is_valid() {
                next += 1;
            }
            if next < count && points[next].is_valid() {
                match clipper.segment_cuts(&points[i], &points[next]) {
                    Cuts::None => {}
                    Cuts::Single(cut) => {
                        shape.push(ShapeVertex {
                            x: cut[0],
                            y: cut[1],
                            tag: ShapeTag::Cut,
                        });
                        added = true;
                    }
                    Cuts::Pair(first, second) => {
                        for cut in [first, second] {
                            shape.push(ShapeVertex {
                                x: cut[0],
                                y: cut[1],
                                tag: ShapeTag::Cut,
                            });
                        }
                        added = true;
                    }
                }
            }

            if added {
                if !any {
                    first_index = i;
                    any = true;
                }
                last_index = i;
            }
        }

        (shape, first_index, last_index)
    }
}

fn pad_limits(lo: f64, hi: f64, scale: Scale) -> Option<Limits> {
    if hi <= lo {
        return None;
    }
    let (lo, hi) = if scale.is_logarithmic() {
        let delta = (0.1 * (hi / lo).ln()).exp();
        (lo / delta, hi * delta)
    } else {
        let delta = 0.1 * (hi - lo);
        (lo - delta, hi + delta)
    };
    Limits::new(lo, hi).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series() -> SeriesGeometry {
        SeriesGeometry::new(
            Viewport::new(100.0, 100.0).unwrap(),
            Limits::new(0.0, 10.0).unwrap(),
            Limits::new(0.0, 10.0).unwrap(),
            Scale::Linear,
            Scale::Linear,
        )
    }

    fn points(values: &[(f64, f64)]) -> PointsArray {
        values.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn mapping_tracks_visibility() {
        let mut series = series();
        series.set_points(points(&[(5.0, 5.0), (15.0, 5.0), (f64::NAN, 1.0)]));

        let mapped = series.mapped_points();
        assert_relative_eq!(mapped.get(0).unwrap().x(), 50.0);
        assert_relative_eq!(mapped.get(0).unwrap().y(), -50.0);
        assert_eq!(series.inside_flags(), &[true, false, false]);
        assert!(!mapped.get(2).unwrap().is_valid());
    }

    #[test]
    fn segments_clip_at_the_boundary() {
        let mut series = series();
        series.set_points(points(&[(5.0, 5.0), (15.0, 5.0)]));

        let segments = series.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, [50.0, -50.0]);
        assert_eq!(segments[0].end, [100.0, -50.0]);
    }

    #[test]
    fn through_segments_use_both_cuts() {
        let mut series = series();
        series.set_points(points(&[(-1.0, 5.0), (15.0, 5.0)]));

        let segments = series.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, [0.0, -50.0]);
        assert_eq!(segments[0].end, [100.0, -50.0]);
    }

    #[test]
    fn invalid_points_break_connectivity() {
        let mut series = series();
        series.set_points(points(&[(2.0, 2.0), (f64::NAN, 5.0), (8.0, 8.0)]));

        assert!(series.segments().is_empty());
        // Indices stay stable: the invalid point is retained.
        assert_eq!(series.points().len(), 3);
    }

    #[test]
    fn log_mapping_invalidates_non_positive_values() {
        let mut series = series();
        series.set_y_scale(Scale::Logarithmic);
        assert_eq!(series.y_limits(), Limits::LOG_FALLBACK);

        series.set_points(points(&[(5.0, 1.0), (6.0, 0.0), (7.0, -2.0)]));
        let mapped = series.mapped_points();
        assert!(mapped.get(0).unwrap().is_valid());
        assert!(!mapped.get(1).unwrap().is_valid());
        assert!(!mapped.get(2).unwrap().is_valid());
    }

    #[test]
    fn hit_testing_respects_the_radius() {
        let mut series = series();
        series.set_points(points(&[(5.0, 5.0), (9.0, 9.0)]));

        // (5, 5) maps to (50, -50).
        let hit = series.point_at(52.0, -52.0);
        assert_eq!(hit.map(Point::x), Some(5.0));

        assert!(series.point_at(60.0, -60.0).is_none());
        // Positions outside the viewport never hit.
        assert!(series.point_at(-5.0, -50.0).is_none());
    }

    #[test]
    fn segment_between_arbitrary_points() {
        let series = series();

        let full = series.segment_between(&Point::new(2.0, 2.0), &Point::new(8.0, 8.0));
        assert_eq!(
            full,
            Some(Segment {
                start: [20.0, -20.0],
                end: [80.0, -80.0],
            })
        );

        let missing = series.segment_between(&Point::new(12.0, 2.0), &Point::new(15.0, 8.0));
        assert!(missing.is_none());

        let invalid = series.segment_between(&Point::new(f64::NAN, 2.0), &Point::new(8.0, 8.0));
        assert!(invalid.is_none());
    }

    #[test]
    fn sloped_line_spans_the_limits() {
        let series = series();
        let segment = series.sloped_line_segment(1.0, 0.0).unwrap();
        assert_eq!(segment.start, [0.0, 0.0]);
        assert_eq!(segment.end, [100.0, -100.0]);
    }

    #[test]
    fn horizontal_shape_closes_on_the_reference() {
        let mut series = series();
        series.set_points(points(&[(2.0, 5.0), (8.0, 5.0)]));

        let shape = series.horizontal_shape(0.0);
        let vertices: Vec<(f64, f64)> = shape.iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(
            vertices,
            vec![(20.0, -50.0), (80.0, -50.0), (80.0, 0.0), (20.0, 0.0)]
        );
    }

    #[test]
    fn horizontal_shape_clamps_an_outside_reference() {
        let mut series = series();
        series.set_points(points(&[(2.0, 5.0), (8.0, 5.0)]));

        // A reference far above the limits closes along the top edge.
        let shape = series.horizontal_shape(50.0);
        let closing: Vec<(f64, f64)> = shape.iter().skip(2).map(|p| (p.x(), p.y())).collect();
        assert_eq!(closing, vec![(80.0, -100.0), (20.0, -100.0)]);
    }

    #[test]
    fn vertical_shape_closes_on_the_reference() {
        let mut series = series();
        series.set_points(points(&[(5.0, 2.0), (5.0, 8.0)]));

        let shape = series.vertical_shape(0.0);
        let vertices: Vec<(f64, f64)> = shape.iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(
            vertices,
            vec![(50.0, -20.0), (50.0, -80.0), (0.0, -80.0), (0.0, -20.0)]
        );
    }

    #[test]
    fn auto_limits_pad_the_data_range() {
        let mut series = series();
        series.set_points(points(&[(1.0, 3.0), (9.0, 7.0), (f64::NAN, 100.0)]));

        let x_limits = series.auto_x_limits(None).unwrap();
        assert_relative_eq!(x_limits.lo(), 0.2);
        assert_relative_eq!(x_limits.hi(), 9.8);

        let y_limits = series.auto_y_limits(None).unwrap();
        assert_relative_eq!(y_limits.lo(), 2.6);
        assert_relative_eq!(y_limits.hi(), 7.4);
    }

    #[test]
    fn auto_limits_respect_cross_axis_constraints() {
        let mut series = series();
        series.set_points(points(&[(1.0, 3.0), (9.0, 3.5), (20.0, 7.0)]));

        // Without a constraint the stray point stretches the range.
        let unconstrained = series.auto_x_limits(None).unwrap();
        assert!(unconstrained.hi() > 20.0);

        // Constraining y to a band around 3 drops the stray point.
        let constrained = series
            .auto_x_limits(Some(Limits::new(2.0, 4.0).unwrap()))
            .unwrap();
        assert_relative_eq!(constrained.lo(), 0.2);
        assert_relative_eq!(constrained.hi(), 9.8);
    }

    #[test]
    fn auto_limits_need_a_usable_span() {
        let mut series = series();
        series.set_points(points(&[(5.0, 5.0)]));
        assert!(series.auto_x_limits(None).is_none());

        series.set_x_scale(Scale::Logarithmic);
        series.set_points(points(&[(-3.0, 1.0), (-1.0, 2.0)]));
        assert!(series.auto_x_limits(None).is_none());
    }

    #[test]
    fn rejected_limits_keep_previous_state() {
        let mut series = series();
        series.set_y_scale(Scale::Logarithmic);
        let before = series.y_limits();

        assert!(series.set_y_limits(Limits::new(-1.0, 5.0).unwrap()).is_err());
        assert_eq!(series.y_limits(), before);
    }
}
