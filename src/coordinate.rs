//! Points and the numeric contract their coordinates must satisfy.

use num_complex::Complex;
use num_traits::{Num, Zero};
use std::fmt::Debug;

/// A point in the plane.
///
/// This is `euclid`'s untyped `Point2D`, so it carries the usual `x` and `y`
/// fields and is `Copy` whenever its coordinate type is.
pub type Point<T> = euclid::default::Point2D<T>;

/// Absolute tolerance used when comparing polylines for equality.
pub const EPSILON: f64 = 1e-6;

/// Shorthand for constructing a `Point`.
#[inline]
pub fn point<T>(x: T, y: T) -> Point<T> {
    euclid::point2(x, y)
}

/// The origin, `(0, 0)`, for any coordinate type.
#[inline]
pub fn origin<T: Coordinate>() -> Point<T> {
    point(T::zero(), T::zero())
}

/// A value that can be used as one coordinate of a `Point`.
///
/// Coordinates are either plain numbers or complex numbers over a plain
/// number. All that polylines need from them is a zero value and the
/// magnitude of the difference between two of them.
pub trait Coordinate: Copy + PartialEq + Zero + Debug {
    /// The absolute difference `|self - other|`, as an `f64`.
    ///
    /// For complex coordinates this is the modulus of the difference.
    fn delta(self, other: Self) -> f64;

    /// Are `self` and `other` within `EPSILON` of each other?
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self.delta(other) <= EPSILON
    }

    /// Is `other - self` a finite value of this type?
    ///
    /// Always true for integers.
    #[inline]
    fn finite_span(self, _other: Self) -> bool {
        true
    }
}

macro_rules! integer_coordinate {
    ( $( $t:ty ),* ) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn delta(self, other: $t) -> f64 {
                    // Exact in the native type; only the result is rounded.
                    self.abs_diff(other) as f64
                }
            }
        )*
    };
}

macro_rules! float_coordinate {
    ( $( $t:ty ),* ) => {
        $(
            impl Coordinate for $t {
                #[inline]
                fn delta(self, other: $t) -> f64 {
                    (self as f64 - other as f64).abs()
                }

                #[inline]
                fn finite_span(self, other: $t) -> bool {
                    // Uniform sampling scales the span up by `1 / (1 - EPSILON)`.
                    let span = other - self;
                    span.is_finite() && (span / (1.0 - <$t>::EPSILON)).is_finite()
                }
            }
        )*
    };
}

integer_coordinate!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_coordinate!(f32, f64);

impl<T> Coordinate for Complex<T>
where
    T: Coordinate + Num,
{
    #[inline]
    fn delta(self, other: Complex<T>) -> f64 {
        self.re.delta(other.re).hypot(self.im.delta(other.im))
    }

    #[inline]
    fn finite_span(self, other: Complex<T>) -> bool {
        self.re.finite_span(other.re) && self.im.finite_span(other.im)
    }
}
