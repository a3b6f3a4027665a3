//! An owning, growable sequence of points.

use crate::coordinate::{origin, Coordinate, Point};
use crate::error::{Error, Result};
use log::trace;
use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};
use std::slice;

/// A polyline is a line along multiple points. Like a polygon that is not
/// closed.
///
/// A polyline always holds at least one point. It tracks its own capacity
/// separately from its length and doubles that capacity whenever an append
/// finds it full, the same way a dynamic array does.
#[derive(Debug)]
pub struct Polyline<T> {
    // Only `coords[..coords.len()]` is meaningful, and
    // `coords.len() <= capacity` always holds.
    coords: Vec<Point<T>>,
    capacity: usize,
}

impl<T> Polyline<T>
where
    T: Coordinate,
{
    /// Construct a polyline of `n` points, all at the origin.
    ///
    /// Fill it in afterwards with indexing or `set`. Fails when `n` is zero.
    ///
    /// ```
    /// use polyline::{point, Polyline};
    ///
    /// let mut line = Polyline::new(2).unwrap();
    /// line[1] = point(3, 4);
    /// assert_eq!(line.to_string(), "(0, 0) -> (3, 4)");
    /// ```
    pub fn new(n: usize) -> Result<Polyline<T>> {
        if n == 0 {
            return Err(Error::InvalidArgument("number of points must be greater than 0"));
        }
        Ok(Polyline {
            coords: vec![origin(); n],
            capacity: n,
        })
    }

    /// Construct a polyline holding just `p`.
    pub fn from_point(p: Point<T>) -> Polyline<T> {
        Polyline {
            coords: vec![p],
            capacity: 1,
        }
    }

    /// Construct a polyline from the given points, in order.
    ///
    /// The polyline's capacity is exactly the number of points. Fails when
    /// `points` is empty.
    pub fn from_points(points: Vec<Point<T>>) -> Result<Polyline<T>> {
        if points.is_empty() {
            return Err(Error::InvalidArgument("a polyline needs at least one point"));
        }
        let capacity = points.len();
        Ok(Polyline {
            coords: points,
            capacity,
        })
    }

    /// A deep copy of this polyline that first checks it is internally
    /// consistent.
    pub fn try_clone(&self) -> Result<Polyline<T>> {
        if self.coords.len() > self.capacity {
            return Err(Error::InvariantViolation {
                len: self.coords.len(),
                capacity: self.capacity,
            });
        }
        Ok(self.clone())
    }

    /// Number of points in this polyline.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Never true for a constructed polyline, which holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// How many points fit before the next append has to grow the storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All points in this polyline.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.coords
    }

    /// Iterate over the points in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Point<T>> {
        self.coords.iter()
    }

    /// The first point.
    #[inline]
    pub fn first(&self) -> Point<T> {
        self.coords[0]
    }

    /// The last point.
    #[inline]
    pub fn last(&self) -> Point<T> {
        self.coords[self.coords.len() - 1]
    }

    /// Get the point at index `i`.
    pub fn get(&self, i: usize) -> Result<&Point<T>> {
        let len = self.len();
        self.coords
            .get(i)
            .ok_or(Error::OutOfRange { index: i, len })
    }

    /// Get a mutable reference to the point at index `i`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut Point<T>> {
        let len = self.len();
        self.coords
            .get_mut(i)
            .ok_or(Error::OutOfRange { index: i, len })
    }

    /// Overwrite the point at index `i`.
    pub fn set(&mut self, i: usize, p: Point<T>) -> Result<()> {
        *self.get_mut(i)? = p;
        Ok(())
    }

    /// Add `p` to the end of this polyline, growing the storage if it is full.
    pub fn append(&mut self, p: Point<T>) -> &mut Polyline<T> {
        if self.coords.len() == self.capacity {
            self.grow();
        }
        self.coords.push(p);
        self
    }

    /// Double the capacity, relocating the existing points into fresh
    /// storage.
    fn grow(&mut self) {
        let new_capacity = cmp::max(1, self.capacity.saturating_mul(2));
        trace!(
            "growing polyline from {} to {} points",
            self.capacity,
            new_capacity
        );

        // The new buffer is fully populated before it replaces the old one, so
        // a failed allocation leaves `self` untouched.
        let mut coords = Vec::with_capacity(new_capacity);
        coords.extend_from_slice(&self.coords);
        self.coords = coords;
        self.capacity = new_capacity;
    }

    /// A new polyline with this polyline's points followed by `other`'s.
    ///
    /// Neither operand is modified, and the result has no spare capacity.
    pub fn concat(&self, other: &Polyline<T>) -> Polyline<T> {
        let capacity = self.len() + other.len();
        let mut coords = Vec::with_capacity(capacity);
        coords.extend_from_slice(&self.coords);
        coords.extend_from_slice(&other.coords);
        Polyline { coords, capacity }
    }

    /// A new polyline that starts at `p` and then follows this polyline.
    pub fn prepend(&self, p: Point<T>) -> Polyline<T> {
        let capacity = self.len() + 1;
        let mut coords = Vec::with_capacity(capacity);
        coords.push(p);
        coords.extend_from_slice(&self.coords);
        Polyline { coords, capacity }
    }
}

impl<T> Clone for Polyline<T>
where
    T: Coordinate,
{
    /// Deep copy into fresh storage of the same capacity.
    fn clone(&self) -> Polyline<T> {
        let mut coords = Vec::with_capacity(self.capacity);
        coords.extend_from_slice(&self.coords);
        Polyline {
            coords,
            capacity: self.capacity,
        }
    }
}

impl<T> TryFrom<Vec<Point<T>>> for Polyline<T>
where
    T: Coordinate,
{
    type Error = Error;

    fn try_from(points: Vec<Point<T>>) -> Result<Polyline<T>> {
        Polyline::from_points(points)
    }
}

impl<T> From<Point<T>> for Polyline<T>
where
    T: Coordinate,
{
    fn from(p: Point<T>) -> Polyline<T> {
        Polyline::from_point(p)
    }
}

impl<T> Index<usize> for Polyline<T>
where
    T: Coordinate,
{
    type Output = Point<T>;

    /// Panics when `i` is out of range; see `get` for a fallible version.
    fn index(&self, i: usize) -> &Point<T> {
        match self.get(i) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Polyline<T>
where
    T: Coordinate,
{
    fn index_mut(&mut self, i: usize) -> &mut Point<T> {
        match self.get_mut(i) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Two polylines are equal when they have the same number of points and
/// every pair of corresponding coordinates is within `EPSILON`.
impl<T> PartialEq for Polyline<T>
where
    T: Coordinate,
{
    fn eq(&self, other: &Polyline<T>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.x.approx_eq(b.x) && a.y.approx_eq(b.y))
    }
}

impl<'a, T> Add<&'a Polyline<T>> for &'a Polyline<T>
where
    T: Coordinate,
{
    type Output = Polyline<T>;

    fn add(self, other: &'a Polyline<T>) -> Polyline<T> {
        self.concat(other)
    }
}

impl<'a, T> Add<&'a Polyline<T>> for Point<T>
where
    T: Coordinate,
{
    type Output = Polyline<T>;

    fn add(self, polyline: &'a Polyline<T>) -> Polyline<T> {
        polyline.prepend(self)
    }
}

impl<T> AddAssign<Point<T>> for Polyline<T>
where
    T: Coordinate,
{
    fn add_assign(&mut self, p: Point<T>) {
        self.append(p);
    }
}

impl<T> Extend<Point<T>> for Polyline<T>
where
    T: Coordinate,
{
    fn extend<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point<T>>,
    {
        for p in points {
            self.append(p);
        }
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a Point<T>;
    type IntoIter = slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// Renders as `(x, y) -> (x, y) -> ...`.
impl<T> fmt::Display for Polyline<T>
where
    T: Coordinate + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        Ok(())
    }
}
