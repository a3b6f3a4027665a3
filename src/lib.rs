//! Growable sequences of 2-dimensional points.
//!
//! A [`Polyline`](./struct.Polyline.html) owns a sequence of
//! [`Point`](./type.Point.html)s, grows its storage by doubling as points
//! are appended, compares equal to another polyline when their coordinates
//! agree within [`EPSILON`](./constant.EPSILON.html), and measures the
//! length of the path it traces.
//!
//! Coordinates may be any primitive number or a `num_complex::Complex` over
//! one; see the [`Coordinate`](./trait.Coordinate.html) trait.
//!
//! ```
//! use polyline::{point, Polyline};
//!
//! let mut path = Polyline::from_point(point(0.0, 0.0));
//! path += point(4.0, 0.0);
//! path += point(4.0, 3.0);
//!
//! let detour = point(-1.0, 0.0) + &path;
//! assert_eq!(detour.len(), 4);
//! assert_eq!(path.length(), 7.0);
//! assert_eq!(detour.to_string(), "(-1, 0) -> (0, 0) -> (4, 0) -> (4, 3)");
//! ```

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]

mod coordinate;
mod error;
mod length;
mod polyline;
mod random;

pub use crate::coordinate::{origin, point, Coordinate, Point, EPSILON};
pub use crate::error::{Error, Result};
pub use crate::polyline::Polyline;

pub use euclid;
pub use num_complex;
pub use rand;
