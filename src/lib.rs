//! plotcore is the computational core of a 2D Cartesian plotting engine:
//! tick generation, value/viewport coordinate mapping and boundary
//! clipping. Every operation returns plain geometry; rendering is left to
//! the caller.

#![forbid(unsafe_code)]

pub mod axis;
pub mod clip;
pub mod error;
pub mod geom;
pub mod rounding;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod transform;

pub use axis::{Axis, AxisSide};
pub use clip::{Clipper, Cuts};
pub use error::{PlotError, Result};
pub use geom::{Point, PointsArray, Viewport};
pub use scale::{Limits, Scale};
pub use series::{Segment, SeriesGeometry};
pub use ticks::Tick;
pub use transform::{Mapper, Orientation};
