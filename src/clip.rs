//! Segment and polygon clipping against the viewport box.
//!
//! Endpoints arrive already mapped to viewport space. The clipper computes
//! where the connecting segment crosses the box boundary, which is all the
//! rendering glue needs to stroke only the visible portion of a line or
//! fill a cropped polygon.

use crate::geom::{Point, PointsArray, Viewport};

/// Distance under which two cuts collapse into one. Empirical guard for
/// floating point error, not derived from a formal bound.
const CUT_TOLERANCE: f64 = 1e-3;

/// Boundary crossings of a clipped segment.
///
/// The variant encodes the inside/outside case that produced it: a segment
/// with one endpoint inside exits the box once, a segment with both
/// endpoints outside either misses the box or passes through it twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cuts {
    /// The segment does not cross the boundary.
    None,
    /// The segment crosses the boundary once.
    Single([f64; 2]),
    /// The segment crosses the boundary twice; the cut nearer the first
    /// endpoint comes first.
    Pair([f64; 2], [f64; 2]),
}

impl Cuts {
    /// Number of crossing points.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Pair(_, _) => 2,
        }
    }

    /// Whether the segment crosses the boundary at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// First crossing point, if any.
    pub fn first(&self) -> Option<[f64; 2]> {
        match self {
            Self::None => None,
            Self::Single(cut) => Some(*cut),
            Self::Pair(cut, _) => Some(*cut),
        }
    }
}

/// Vertex tags used while cropping a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexKind {
    Inner,
    SingleCut,
    DoubleCut,
}

/// Clips segments and polygons against a viewport box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper {
    viewport: Viewport,
}

impl Clipper {
    /// Create a clipper for the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// The viewport being clipped against.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Check whether a mapped position lies inside the box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.viewport.contains(x, y)
    }

    /// Boundary cuts of the segment between two mapped points.
    ///
    /// Invalid endpoints yield no cuts. With one endpoint inside the result
    /// is exactly one cut (collapsing onto the inside endpoint when the
    /// segment is tangent at the boundary); with both endpoints outside it
    /// is either no cut or a pair ordered by proximity to `p1`.
    pub fn segment_cuts(&self, p1: &Point, p2: &Point) -> Cuts {
        if !p1.is_valid() || !p2.is_valid() {
            return Cuts::None;
        }

        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());
        let width = self.viewport.width();
        let height = self.viewport.height();
        let inside1 = self.contains(x1, y1);
        let inside2 = self.contains(x2, y2);

        // The segment cannot cross the boundary when both endpoints are
        // inside or both sit beyond the same box edge.
        let cannot_cut = (inside1 && inside2)
            || (x1 < 0.0 && x2 < 0.0)
            || (x1 > width && x2 > width)
            || (-y1 < 0.0 && -y2 < 0.0)
            || (-y1 > height && -y2 > height);
        if cannot_cut {
            return Cuts::None;
        }

        // Intersect the infinite line through the endpoints with all four
        // box edges, special-casing vertical and horizontal segments.
        let delta_x = x2 - x1;
        let delta_y = y2 - y1;
        let mut cuts: Vec<[f64; 2]> = if delta_x == 0.0 {
            vec![[x1, 0.0], [x1, -height]]
        } else if delta_y == 0.0 {
            vec![[0.0, y1], [width, y1]]
        } else {
            let slope = delta_y / delta_x;
            let y_cut = y1 - slope * x1;
            vec![
                [-y_cut / slope, 0.0],
                [(-height - y_cut) / slope, -height],
                [0.0, y_cut],
                [width, y_cut + slope * width],
            ]
        };

        self.retain_valid_cuts(&mut cuts, [x1, y1], [x2, y2]);

        if inside1 || inside2 {
            let inside_point = if inside1 { [x1, y1] } else { [x2, y2] };

            if cuts.len() != 1 {
                if cuts.len() > 1 {
                    remove_duplicated_cuts(&mut cuts, 0.0);
                    if cuts.len() > 1 {
                        remove_point_from_cuts(&mut cuts, inside_point, 0.0);
                        if cuts.len() > 1 {
                            remove_duplicated_cuts(&mut cuts, CUT_TOLERANCE);
                            if cuts.len() > 1 {
                                remove_point_from_cuts(&mut cuts, inside_point, CUT_TOLERANCE);
                            }
                        }
                    }
                }

                // Tangent at the boundary: the cut degenerates to the
                // inside endpoint itself.
                if cuts.is_empty() {
                    cuts.push(inside_point);
                }
            }

            if cuts.len() != 1 {
                debug_assert!(false, "expected one boundary cut, found {}", cuts.len());
                tracing::warn!(found = cuts.len(), "expected one boundary cut");
            }
            match cuts.first() {
                Some(&cut) => Cuts::Single(cut),
                None => Cuts::None,
            }
        } else {
            if cuts.len() > 2 {
                remove_duplicated_cuts(&mut cuts, 0.0);
                if cuts.len() > 2 {
                    remove_duplicated_cuts(&mut cuts, CUT_TOLERANCE);
                }
            }

            if cuts.len() == 2 {
                // Nearest to the first endpoint goes first.
                let d0 = (cuts[0][0] - x1).abs() + (cuts[0][1] - y1).abs();
                let d1 = (cuts[1][0] - x1).abs() + (cuts[1][1] - y1).abs();
                if d0 > d1 {
                    cuts.swap(0, 1);
                }
            }

            match cuts.len() {
                0 => Cuts::None,
                // Grazing a corner: both crossing points coincide.
                1 => Cuts::Pair(cuts[0], cuts[0]),
                2 => Cuts::Pair(cuts[0], cuts[1]),
                found => {
                    debug_assert!(false, "expected zero or two boundary cuts, found {found}");
                    tracing::warn!(found, "expected zero or two boundary cuts");
                    Cuts::Pair(cuts[0], cuts[1])
                }
            }
        }
    }

    // helpers `remove_duplicated_cuts` / `remove_point_from_cuts` are free
    // functions defined below this impl block.

    /// Keep only cuts that lie inside the box and between the endpoints
    /// (on the segment, not on the line's extension).
    fn retain_valid_cuts(&self, cuts: &mut Vec<[f64; 2]>, p1: [f64; 2], p2: [f64; 2]) {
        let delta_x = (p2[0] - p1[0]).abs();
        let delta_y = (p2[1] - p1[1]).abs();
        cuts.retain(|cut| {
            self.contains(cut[0], cut[1])
                && (cut[0] - p1[0]).abs() <= delta_x
                && (cut[1] - p1[1]).abs() <= delta_y
                && (cut[0] - p2[0]).abs() <= delta_x
                && (cut[1] - p2[1]).abs() <= delta_y
        });
    }

    /// Crop a closed polygon to the viewport box.
    ///
    /// Walks the edges `(i, i + 1 mod n)`, keeping inside vertices and
    /// splicing in the boundary cuts of each edge; a post-pass inserts the
    /// box corner between two consecutive cuts that land on different
    /// edges. Invalid points must be removed by the caller. Polygons that
    /// collapse to two points or fewer come back empty.
    pub fn clip_polygon(&self, polygon: &[Point]) -> PointsArray {
        if polygon.len() <= 2 {
            return PointsArray::new();
        }

        let count = polygon.len();
        let mut tagged: Vec<([f64; 2], VertexKind)> = Vec::with_capacity(2 * count);

        for (i, point) in polygon.iter().enumerate() {
            if self.contains(point.x(), point.y()) {
                tagged.push(([point.x(), point.y()], VertexKind::Inner));
            }

            let next = &polygon[(i + 1) % count];
            match self.segment_cuts(point, next) {
                Cuts::None => {}
                Cuts::Single(cut) => tagged.push((cut, VertexKind::SingleCut)),
                Cuts::Pair(first, second) => {
                    tagged.push((first, VertexKind::DoubleCut));
                    tagged.push((second, VertexKind::DoubleCut));
                }
            }
        }

        let width = self.viewport.width();
        let height = self.viewport.height();
        let count = tagged.len();
        let mut cropped = PointsArray::with_capacity(2 * count);

        for i in 0..count {
            let (position, kind) = tagged[i];
            cropped.add(position[0], position[1]);

            let (next_position, next_kind) = tagged[(i + 1) % count];
            let corner_candidate = matches!(
                (kind, next_kind),
                (VertexKind::SingleCut, VertexKind::SingleCut)
                    | (VertexKind::SingleCut, VertexKind::DoubleCut)
                    | (VertexKind::DoubleCut, VertexKind::SingleCut)
            );

            if corner_candidate {
                let delta_x = (next_position[0] - position[0]).abs();
                let delta_y = (next_position[1] - position[1]).abs();

                // Consecutive cuts on two different box edges leave a
                // corner uncovered; close the polygon around it.
                if delta_x > 0.0 && delta_y > 0.0 && delta_x != width && delta_y != height {
                    let x = if position[0] == 0.0 || position[0] == width {
                        position[0]
                    } else {
                        next_position[0]
                    };
                    let y = if position[1] == 0.0 || position[1] == -height {
                        position[1]
                    } else {
                        next_position[1]
                    };
                    cropped.add(x, y);
                }
            }
        }

        if cropped.len() > 2 {
            cropped
        } else {
            PointsArray::new()
        }
    }
}

/// Collapse cuts that coincide within `tolerance`, keeping the first
/// occurrence and discarding any later cut that lands within `tolerance`
/// (per coordinate) of one already kept.
fn remove_duplicated_cuts(cuts: &mut Vec<[f64; 2]>, tolerance: f64) {
    let mut kept: Vec<[f64; 2]> = Vec::with_capacity(cuts.len());
    for &cut in cuts.iter() {
        let repeated = kept.iter().any(|k| {
            (k[0] - cut[0]).abs() <= tolerance && (k[1] - cut[1]).abs() <= tolerance
        });
        if !repeated {
            kept.push(cut);
        }
    }
    *cuts = kept;
}

/// Drop cuts that coincide with `point` within `tolerance` (per coordinate).
fn remove_point_from_cuts(cuts: &mut Vec<[f64; 2]>, point: [f64; 2], tolerance: f64) {
    cuts.retain(|cut| {
        (cut[0] - point[0]).abs() > tolerance || (cut[1] - point[1]).abs() > tolerance
    });
}
