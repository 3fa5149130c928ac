use crate::matrix::DistanceMatrix;
use crate::numeric::min_cost;

/// Full-table Levenshtein recurrence over code-point slices.
pub(super) fn distance(lhs: &[char], rhs: &[char]) -> usize {
    if lhs.is_empty() {
        return rhs.len();
    }
    if rhs.is_empty() {
        return lhs.len();
    }

    let mut table = DistanceMatrix::with_borders(lhs.len(), rhs.len());
    for (i, lhs_char) in lhs.iter().enumerate() {
        for (j, rhs_char) in rhs.iter().enumerate() {
            let (row, col) = (i + 1, j + 1);
            table[(row, col)] = if lhs_char == rhs_char {
                table[(i, j)]
            } else {
                1 + min_cost([table[(i, col)], table[(row, j)], table[(i, j)]])
            };
        }
    }
    table.last()
}
