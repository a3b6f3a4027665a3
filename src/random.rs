//! Randomly generated polylines.

use crate::coordinate::{point, Coordinate};
use crate::error::{Error, Result};
use crate::polyline::Polyline;
use log::debug;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

impl<T> Polyline<T>
where
    T: Coordinate + PartialOrd + SampleUniform,
{
    /// Construct a polyline of `n` points whose coordinates are drawn
    /// uniformly from `[lo, hi]` using the thread-local random number
    /// generator.
    ///
    /// Fails when `n` is zero, when `lo` is not less than or equal to `hi`, or
    /// when the span from `lo` to `hi` is too wide to sample from.
    pub fn random(n: usize, lo: T, hi: T) -> Result<Polyline<T>> {
        Polyline::random_with(&mut rand::thread_rng(), n, lo, hi)
    }

    /// Like `random`, but draws from the given generator.
    ///
    /// Seeding the generator makes the result reproducible:
    ///
    /// ```
    /// use polyline::Polyline;
    /// use polyline::rand::{rngs::SmallRng, SeedableRng};
    ///
    /// let a = Polyline::random_with(&mut SmallRng::seed_from_u64(7), 5, 1.0, 8.0).unwrap();
    /// let b = Polyline::random_with(&mut SmallRng::seed_from_u64(7), 5, 1.0, 8.0).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with<R>(rng: &mut R, n: usize, lo: T, hi: T) -> Result<Polyline<T>>
    where
        R: Rng,
    {
        if n == 0 {
            return Err(Error::InvalidArgument("number of points must be greater than 0"));
        }
        // Written this way round so unordered bounds (NaN) are rejected too.
        if !(lo <= hi) {
            return Err(Error::InvalidArgument("lower bound must not exceed upper bound"));
        }
        if !lo.finite_span(hi) {
            return Err(Error::InvalidArgument("range between bounds must be finite"));
        }

        debug!("generating random polyline of {} points in [{:?}, {:?}]", n, lo, hi);
        let points = (0..n)
            .map(|_| {
                let x = rng.gen_range(lo..=hi);
                let y = rng.gen_range(lo..=hi);
                point(x, y)
            })
            .collect();
        Polyline::from_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn points_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p = Polyline::random_with(&mut rng, 100, 1.0f32, 8.0).unwrap();
        assert_eq!(p.len(), 100);
        assert_eq!(p.capacity(), 100);
        for q in &p {
            assert!(1.0 <= q.x && q.x <= 8.0);
            assert!(1.0 <= q.y && q.y <= 8.0);
        }
    }

    #[test]
    fn integer_range_is_inclusive() {
        let p = Polyline::random(50, -2i64, 2).unwrap();
        assert!(p.iter().all(|q| (-2..=2).contains(&q.x) && (-2..=2).contains(&q.y)));
    }

    #[test]
    fn degenerate_range_is_constant() {
        let p = Polyline::random(3, 5u8, 5).unwrap();
        assert!(p.iter().all(|q| q.x == 5 && q.y == 5));
    }

    #[test]
    fn seeded_generators_agree() {
        let a = Polyline::random_with(&mut SmallRng::seed_from_u64(1), 10, 0.0, 1.0).unwrap();
        let b = Polyline::random_with(&mut SmallRng::seed_from_u64(1), 10, 0.0, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Polyline::random(0, 0.0, 1.0).is_err());
        assert!(Polyline::random(3, 2.0, 1.0).is_err());
        assert!(Polyline::random(3, std::f64::NAN, 1.0).is_err());
    }

    #[test]
    fn rejects_unsampleable_spans() {
        let too_wide = Error::InvalidArgument("range between bounds must be finite");
        assert_eq!(
            Polyline::random(3, std::f64::MIN, std::f64::MAX).unwrap_err(),
            too_wide
        );
        assert_eq!(
            Polyline::random(3, 0.0, std::f64::INFINITY).unwrap_err(),
            too_wide
        );
        assert_eq!(
            Polyline::random(3, std::f64::NEG_INFINITY, 0.0).unwrap_err(),
            too_wide
        );
        assert_eq!(
            Polyline::random(3, std::f32::MIN, std::f32::MAX).unwrap_err(),
            too_wide
        );
        assert!(Polyline::random(3, -1e300, 1e300).is_ok());
    }

    #[test]
    fn full_integer_range_samples() {
        let p = Polyline::random(20, std::i64::MIN, std::i64::MAX).unwrap();
        assert_eq!(p.len(), 20);
    }
}
