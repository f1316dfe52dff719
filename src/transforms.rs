//! Variable transformations.
//!
//! A transformation maps an unconstrained variable `t` to a constrained
//! variable `x` lying inside some feasible region, and back again. An
//! optimizer adjusts `t` freely; the objective function is evaluated at
//! `x = t_to_x(t)`, which is feasible by construction. Re-parameterizing
//! an initial guess goes the other way, via `x_to_t`.
pub mod interval;
pub mod positive;

/// Variable transformation.
///
/// Implementations are stateless value objects: every call is a pure
/// function of the explicit inputs, writing its result into the
/// caller-supplied output buffer without allocating.
pub trait Transform {
    /// Scalar type the transformation operates on.
    type Scalar;

    /// Returns the dimension of the constrained variable `x`.
    fn x_dimension(&self) -> usize;

    /// Returns the dimension of the unconstrained variable `t`.
    fn t_dimension(&self) -> usize;

    /// Converts the unconstrained variable `t` to the constrained variable `x`.
    ///
    /// `x` must have `x_dimension()` elements and `t` must have
    /// `t_dimension()` elements.
    fn t_to_x(&self, x: &mut [Self::Scalar], t: &[Self::Scalar]);

    /// Converts the constrained variable `x` to the unconstrained variable `t`.
    ///
    /// This is the inverse of `t_to_x` on the interior of the feasible
    /// region. `t` must have `t_dimension()` elements and `x` must have
    /// `x_dimension()` elements.
    fn x_to_t(&self, t: &mut [Self::Scalar], x: &[Self::Scalar]);
}

#[cfg(test)]
mod tests {
    use super::interval::{BoxTransform, IntervalTransform};
    use super::positive::PositiveTransform;
    use super::Transform;
    use trackable::result::TestResult;

    #[test]
    fn transforms_share_one_contract() -> TestResult {
        let lower = [0.0, -1.0];
        let upper = [1.0, 1.0];
        let positive = PositiveTransform::new(2);
        let interval = track!(IntervalTransform::new(-2.0, 2.0))?;
        let boxed = track!(BoxTransform::new(&lower, &upper))?;

        let transforms: Vec<&dyn Transform<Scalar = f64>> =
            vec![&positive, &interval, &boxed];
        for transform in transforms {
            let t = vec![0.25; transform.t_dimension()];
            let mut x = vec![0.0; transform.x_dimension()];
            let mut u = vec![0.0; transform.t_dimension()];
            transform.t_to_x(&mut x, &t);
            transform.x_to_t(&mut u, &x);
            for (a, b) in t.iter().zip(u.iter()) {
                assert!((a - b).abs() < 1e-9);
            }
        }
        Ok(())
    }
}
