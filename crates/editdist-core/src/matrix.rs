use std::ops::{Index, IndexMut};

/// Row-major `(rows) × (cols)` cost table indexed by prefix lengths.
///
/// Cell `[(i, j)]` holds the cheapest way to turn the first `i` code points
/// of the left input into the first `j` code points of the right input.
#[derive(Clone, Debug)]
pub(crate) struct DistanceMatrix {
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Builds a table for sequences of length `m` and `n`, with row 0 and
    /// column 0 already holding the pure insertion and deletion costs.
    pub(crate) fn with_borders(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        let mut matrix = Self { cols, cells: vec![0; rows * cols] };
        for i in 0..rows {
            matrix[(i, 0)] = i;
        }
        for j in 0..cols {
            matrix[(0, j)] = j;
        }
        matrix
    }

    /// Value of the bottom-right cell.
    pub(crate) fn last(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = usize;

    fn index(&self, (row, col): (usize, usize)) -> &usize {
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut usize {
        &mut self.cells[row * self.cols + col]
    }
}
