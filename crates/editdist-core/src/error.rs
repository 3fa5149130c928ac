use thiserror::Error;

/// Errors that can occur while computing a distance.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// Hamming distance is only defined for inputs of equal length.
    ///
    /// Lengths are counted in code points after case folding.
    #[error(
        "hamming distance requires equal lengths: left has {left} code points, right has {right}"
    )]
    LengthMismatch {
        /// Code-point length of the left input.
        left: usize,
        /// Code-point length of the right input.
        right: usize,
    },
}

/// Returned when a metric name cannot be parsed into a [`Metric`](crate::Metric).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown metric `{name}` (expected levenshtein, damerau-levenshtein or hamming)")]
pub struct MetricParseError {
    /// The name that failed to parse.
    pub name: String,
}
