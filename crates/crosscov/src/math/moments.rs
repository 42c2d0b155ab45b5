//! Sample moments that skip non-finite values.
//!
//! Missing observations are encoded as NaN throughout the crate, so the
//! moment helpers here drop any value (or pair) that is not finite instead
//! of propagating it.

// External dependencies
use num_traits::Float;

// Mean of the finite entries, or `None` when there are none.
pub fn finite_mean<T: Float>(values: &[T]) -> Option<T> {
    let mut sum = T::zero();
    let mut count = 0usize;
    for &v in values {
        if v.is_finite() {
            sum = sum + v;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(sum / T::from(count).unwrap_or(T::one()))
}

// Sample covariance over the pairs where both entries are finite.
//
// Uses the `m - 1` denominator. Fewer than two complete pairs yields NaN.
pub fn pairwise_covariance<T, I>(pairs: I) -> T
where
    T: Float,
    I: Iterator<Item = (T, T)> + Clone,
{
    let complete = pairs.filter(|(a, b)| a.is_finite() && b.is_finite());

    let mut m = 0usize;
    let mut sum_a = T::zero();
    let mut sum_b = T::zero();
    for (a, b) in complete.clone() {
        sum_a = sum_a + a;
        sum_b = sum_b + b;
        m += 1;
    }
    if m < 2 {
        return T::nan();
    }

    let m_t = T::from(m).unwrap_or(T::one());
    let mean_a = sum_a / m_t;
    let mean_b = sum_b / m_t;

    let mut cross = T::zero();
    for (a, b) in complete {
        cross = cross + (a - mean_a) * (b - mean_b);
    }
    cross / (m_t - T::one())
}
