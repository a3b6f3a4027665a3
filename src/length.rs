//! Path length along a polyline.

use crate::coordinate::Coordinate;
use crate::polyline::Polyline;
use num_complex::Complex64;
use num_traits::AsPrimitive;

impl<T> Polyline<T>
where
    T: Coordinate,
{
    /// Total length of all segments in this polyline.
    ///
    /// Axis-aligned segments contribute the difference along their one
    /// varying axis; every other segment contributes its Euclidean length.
    /// Each segment is counted exactly once.
    ///
    /// ```
    /// use polyline::{point, Polyline};
    ///
    /// let path = Polyline::from_points(vec![point(0, 0), point(4, 0), point(4, 3)]).unwrap();
    /// assert_eq!(path.length(), 7.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.points()
            .windows(2)
            .map(|w| {
                let (a, b) = (w[0], w[1]);
                if a.x == b.x {
                    a.y.delta(b.y)
                } else if a.y == b.y {
                    a.x.delta(b.x)
                } else {
                    a.x.delta(b.x).hypot(a.y.delta(b.y))
                }
            })
            .sum()
    }
}

impl<T> Polyline<T>
where
    T: Coordinate + AsPrimitive<f64>,
{
    /// Total length of all segments, treating each point as the complex
    /// number `x + yi` and summing the moduli of consecutive differences.
    pub fn length_complex(&self) -> f64 {
        self.points()
            .windows(2)
            .map(|w| {
                let a = Complex64::new(w[0].x.as_(), w[0].y.as_());
                let b = Complex64::new(w[1].x.as_(), w[1].y.as_());
                (b - a).norm()
            })
            .sum()
    }
}
