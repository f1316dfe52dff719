//! Positivity transformation.
use crate::transforms::Transform;
use num_traits::Float;
use std::marker::PhantomData;

/// Transformation that forces every coordinate of a variable to be
/// non-negative by squaring it: `x[i] = t[i] * t[i]`.
///
/// The inverse takes the non-negative square root, so a round-trip
/// reproduces `t` only for `t[i] >= 0`. Note that `t[i] = 0` maps to
/// `x[i] = 0`, which lies on the boundary of the feasible region rather
/// than strictly inside it.
///
/// Unlike the bounded transformations, construction performs no
/// validation and cannot fail.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct PositiveTransform<T> {
    dimension: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    _scalar: PhantomData<T>,
}
impl<T> PositiveTransform<T> {
    /// Makes a new `PositiveTransform` instance.
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            _scalar: PhantomData,
        }
    }

    /// Returns the dimension of this transformation.
    pub const fn dimension(&self) -> usize {
        self.dimension
    }
}
impl<T> PositiveTransform<T>
where
    T: Float,
{
    /// Returns `true` if every coordinate of `x` is non-negative.
    pub fn contains(&self, x: &[T]) -> bool {
        x.len() == self.dimension && x.iter().all(|v| *v >= T::zero())
    }
}
impl<T> Transform for PositiveTransform<T>
where
    T: Float,
{
    type Scalar = T;

    fn x_dimension(&self) -> usize {
        self.dimension
    }

    fn t_dimension(&self) -> usize {
        self.dimension
    }

    fn t_to_x(&self, x: &mut [T], t: &[T]) {
        debug_assert_eq!(x.len(), self.dimension);
        debug_assert_eq!(t.len(), self.dimension);
        for i in 0..self.dimension {
            x[i] = t[i] * t[i];
        }
    }

    fn x_to_t(&self, t: &mut [T], x: &[T]) {
        debug_assert_eq!(t.len(), self.dimension);
        debug_assert_eq!(x.len(), self.dimension);
        for i in 0..self.dimension {
            t[i] = x[i].sqrt();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squaring_works() {
        let transform = PositiveTransform::new(3);
        let mut x = [0.0f64; 3];
        transform.t_to_x(&mut x, &[0.5, -1.5, 3.0]);
        assert_eq!(x, [0.25, 2.25, 9.0]);
    }

    #[test]
    fn round_trip_works() {
        let transform = PositiveTransform::new(4);
        let t = [0.0f64, 0.5, 1.5, 30.0];
        let mut x = [0.0; 4];
        let mut u = [0.0; 4];
        transform.t_to_x(&mut x, &t);
        transform.x_to_t(&mut u, &x);
        for (a, b) in t.iter().zip(u.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_maps_to_the_boundary() {
        let transform = PositiveTransform::new(1);
        let mut x = [1.0f64];
        transform.t_to_x(&mut x, &[0.0]);
        assert_eq!(x, [0.0]);
        assert!(transform.contains(&x));
    }

    #[test]
    fn negative_x_propagates_nan() {
        let transform = PositiveTransform::new(1);
        let mut t = [0.0f64];
        transform.x_to_t(&mut t, &[-1.0]);
        assert!(t[0].is_nan());
    }

    #[test]
    fn forward_is_non_decreasing_for_non_negative_t() {
        let transform = PositiveTransform::new(1);
        let mut last = -1.0;
        for i in 0..100 {
            let t = f64::from(i) * 0.1;
            let mut x = [0.0];
            transform.t_to_x(&mut x, &[t]);
            assert!(x[0] >= last);
            last = x[0];
        }
    }

    #[test]
    fn dimension_reporting_works() {
        let transform = PositiveTransform::<f64>::new(4);
        assert_eq!(transform.dimension(), 4);
        assert_eq!(transform.x_dimension(), 4);
        assert_eq!(transform.t_dimension(), 4);
    }

    #[test]
    fn contains_works() {
        let transform = PositiveTransform::<f64>::new(2);
        assert!(transform.contains(&[0.0, 1.0]));
        assert!(!transform.contains(&[-0.1, 1.0]));
        assert!(!transform.contains(&[1.0]));
    }
}
