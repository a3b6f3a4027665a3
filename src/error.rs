//! Errors raised by polyline operations.

use failure::Fail;

/// Everything that can go wrong when building or indexing a `Polyline`.
#[derive(Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A constructor was handed arguments it cannot build a polyline from.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(&'static str),

    /// An index was at or beyond the polyline's number of points.
    #[fail(display = "index {} out of range for polyline of {} points", index, len)]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The number of points in the polyline.
        len: usize,
    },

    /// A polyline claimed to hold more points than it has room for.
    #[fail(
        display = "polyline holds {} points but only has capacity for {}",
        len, capacity
    )]
    InvariantViolation {
        /// The number of points in the polyline.
        len: usize,
        /// The polyline's allocated capacity.
        capacity: usize,
    },
}

/// Either a `T` or a polyline `Error`.
pub type Result<T> = std::result::Result<T, Error>;
