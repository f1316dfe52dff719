//! Interval and box transformations.
use crate::transforms::Transform;
use crate::{ErrorKind, Result};
use num_traits::{Float, FloatConst};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Distribution;
use rand::Rng;
use std::cmp::Ordering;

/// Transformation that forces a scalar variable into the open interval
/// `(low, high)`:
///
/// ```text
/// x = low + (high - low) * (atan(t)/pi + 1/2)
/// t = tan(((x - low) / (high - low) - 1/2) * pi)
/// ```
///
/// As `t` goes to positive (resp. negative) infinity, `x` approaches
/// `high` (resp. `low`) without ever reaching it, and `t = 0` maps to the
/// midpoint of the interval. The inverse diverges as `x` approaches
/// either bound, mirroring the forward asymptote.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy)]
pub struct IntervalTransform<T> {
    low: T,
    high: T,
}
impl<T> IntervalTransform<T>
where
    T: Float,
{
    /// Makes a new `IntervalTransform` instance.
    ///
    /// # Errors
    ///
    /// If `low` is not strictly smaller than `high`, this function
    /// returns an `ErrorKind::InvalidInput` error.
    pub fn new(low: T, high: T) -> Result<Self> {
        track_assert_eq!(
            low.partial_cmp(&high),
            Some(Ordering::Less),
            ErrorKind::InvalidInput
        );
        Ok(Self { low, high })
    }

    /// Returns the lower bound of the feasible interval.
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the upper bound of the feasible interval.
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns `true` if `x` lies strictly inside the feasible interval.
    pub fn contains(&self, x: T) -> bool {
        self.low < x && x < self.high
    }
}
impl<T> Transform for IntervalTransform<T>
where
    T: Float + FloatConst,
{
    type Scalar = T;

    fn x_dimension(&self) -> usize {
        1
    }

    fn t_dimension(&self) -> usize {
        1
    }

    fn t_to_x(&self, x: &mut [T], t: &[T]) {
        debug_assert_eq!(x.len(), 1);
        debug_assert_eq!(t.len(), 1);
        x[0] = self.low
            + (self.high - self.low) * (t[0].atan() + T::FRAC_PI_2()) * T::FRAC_1_PI();
    }

    fn x_to_t(&self, t: &mut [T], x: &[T]) {
        debug_assert_eq!(t.len(), 1);
        debug_assert_eq!(x.len(), 1);
        t[0] = ((x[0] - self.low) / (self.high - self.low) * T::PI() - T::FRAC_PI_2()).tan();
    }
}
impl<T> Distribution<T> for IntervalTransform<T>
where
    T: Float + SampleUniform,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        rng.gen_range(self.low..self.high)
    }
}

/// The n-dimensional generalization of [`IntervalTransform`]: coordinate
/// `i` is forced into its own open interval `(lower[i], upper[i])`,
/// independently of every other coordinate.
///
/// The bound slices are borrowed rather than copied, so the
/// transformation is only usable while the caller keeps them alive (the
/// borrow checker enforces this).
#[derive(Debug, Clone, Copy)]
pub struct BoxTransform<'a, T> {
    lower: &'a [T],
    upper: &'a [T],
}
impl<'a, T> BoxTransform<'a, T>
where
    T: Float,
{
    /// Makes a new `BoxTransform` instance.
    ///
    /// The bounds are scanned in ascending axis order and the first
    /// violation aborts construction.
    ///
    /// # Errors
    ///
    /// If `lower` and `upper` differ in length, or if `lower[i]` is not
    /// strictly smaller than `upper[i]` for some axis `i`, this function
    /// returns an `ErrorKind::InvalidInput` error.
    pub fn new(lower: &'a [T], upper: &'a [T]) -> Result<Self> {
        track_assert_eq!(lower.len(), upper.len(), ErrorKind::InvalidInput);
        for (i, (low, high)) in lower.iter().zip(upper.iter()).enumerate() {
            track_assert!(
                low.partial_cmp(high) == Some(Ordering::Less),
                ErrorKind::InvalidInput; i
            );
        }
        Ok(Self { lower, upper })
    }

    /// Returns the dimension of this transformation.
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Returns the per-axis lower bounds.
    pub fn lower(&self) -> &'a [T] {
        self.lower
    }

    /// Returns the per-axis upper bounds.
    pub fn upper(&self) -> &'a [T] {
        self.upper
    }

    /// Returns `true` if every coordinate of `x` lies strictly inside
    /// its axis interval.
    pub fn contains(&self, x: &[T]) -> bool {
        x.len() == self.dimension()
            && x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(v, (low, high))| *low < *v && *v < *high)
    }
}
impl<'a, T> Transform for BoxTransform<'a, T>
where
    T: Float + FloatConst,
{
    type Scalar = T;

    fn x_dimension(&self) -> usize {
        self.lower.len()
    }

    fn t_dimension(&self) -> usize {
        self.lower.len()
    }

    fn t_to_x(&self, x: &mut [T], t: &[T]) {
        debug_assert_eq!(x.len(), self.lower.len());
        debug_assert_eq!(t.len(), self.lower.len());
        for i in 0..self.lower.len() {
            let (low, high) = (self.lower[i], self.upper[i]);
            x[i] = low + (high - low) * (t[i].atan() + T::FRAC_PI_2()) * T::FRAC_1_PI();
        }
    }

    fn x_to_t(&self, t: &mut [T], x: &[T]) {
        debug_assert_eq!(t.len(), self.lower.len());
        debug_assert_eq!(x.len(), self.lower.len());
        for i in 0..self.lower.len() {
            let (low, high) = (self.lower[i], self.upper[i]);
            t[i] = ((x[i] - low) / (high - low) * T::PI() - T::FRAC_PI_2()).tan();
        }
    }
}
impl<'a, T> Distribution<Vec<T>> for BoxTransform<'a, T>
where
    T: Float + SampleUniform,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&low, &high)| rng.gen_range(low..high))
            .collect()
    }
}
