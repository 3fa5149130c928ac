//! Small numeric helpers shared by the recurrences.

/// Smallest of a fixed set of costs.
#[inline]
pub(crate) fn min_cost<const N: usize>(costs: [usize; N]) -> usize {
    costs.into_iter().min().unwrap_or(usize::MAX)
}

/// Larger of two code-point lengths.
#[inline]
pub(crate) fn max_len(lhs: usize, rhs: usize) -> usize {
    if lhs < rhs {
        rhs
    } else {
        lhs
    }
}

/// Clamps a ratio into `[0, 1]`.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
