use crate::DistanceError;

/// Counts positions where equal-length slices differ.
pub(super) fn distance(lhs: &[char], rhs: &[char]) -> Result<usize, DistanceError> {
    if lhs.len() != rhs.len() {
        return Err(DistanceError::LengthMismatch { left: lhs.len(), right: rhs.len() });
    }
    Ok(lhs.iter().zip(rhs).filter(|(a, b)| a != b).count())
}
