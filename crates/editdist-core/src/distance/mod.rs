//! The three distance functions and runtime metric dispatch.
//!
//! Each public function folds case when asked, splits both inputs into code
//! points, and runs its algorithm over the resulting slices. Nothing is
//! cached between calls.

mod damerau;
mod levenshtein_table;
mod mismatch;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::normalize::code_points;
use crate::numeric::{clamp_unit, max_len};
use crate::{CompareOptions, DistanceError, Metric};

/// Levenshtein distance between `lhs` and `rhs`.
///
/// Counts the insertions, deletions and substitutions of single code points
/// needed to turn one string into the other. Total over all inputs.
///
/// ```
/// # use editdist_core::levenshtein;
/// assert_eq!(levenshtein("kitten", "sitting", true), 3);
/// assert_eq!(levenshtein("ABC", "abc", false), 0);
/// assert_eq!(levenshtein("", "日本", true), 2);
/// ```
#[must_use]
pub fn levenshtein(lhs: &str, rhs: &str, case_sensitive: bool) -> usize {
    let lhs = code_points(lhs, case_sensitive);
    let rhs = code_points(rhs, case_sensitive);
    levenshtein_table::distance(&lhs, &rhs)
}

/// True Damerau-Levenshtein distance between `lhs` and `rhs`.
///
/// Like [`levenshtein`], but swapping two adjacent code points also costs one
/// edit. Unlike optimal string alignment, a transposed pair may be edited
/// again, so `"ca"` to `"abc"` costs two (swap, then insert).
///
/// ```
/// # use editdist_core::damerau_levenshtein;
/// assert_eq!(damerau_levenshtein("ca", "abc", true), 2);
/// assert_eq!(damerau_levenshtein("abcd", "bacd", true), 1);
/// ```
#[must_use]
pub fn damerau_levenshtein(lhs: &str, rhs: &str, case_sensitive: bool) -> usize {
    let lhs = code_points(lhs, case_sensitive);
    let rhs = code_points(rhs, case_sensitive);
    damerau::distance(&lhs, &rhs)
}

/// Hamming distance between `lhs` and `rhs`.
///
/// Fails with [`DistanceError::LengthMismatch`] when the inputs have a
/// different number of code points after case folding.
///
/// ```
/// # use editdist_core::{hamming, DistanceError};
/// assert_eq!(hamming("karolin", "kathrin", true), Ok(3));
/// assert_eq!(
///     hamming("abc", "ab", true),
///     Err(DistanceError::LengthMismatch { left: 3, right: 2 })
/// );
/// ```
pub fn hamming(lhs: &str, rhs: &str, case_sensitive: bool) -> Result<usize, DistanceError> {
    let lhs = code_points(lhs, case_sensitive);
    let rhs = code_points(rhs, case_sensitive);
    mismatch::distance(&lhs, &rhs)
}

/// Normalized similarity in `[0, 1]` for a distance over inputs of the given
/// code-point lengths.
///
/// Computed as `1 - distance / max(lhs_len, rhs_len)`; two empty inputs are
/// identical and score `1.0`.
///
/// ```
/// # use editdist_core::similarity;
/// assert_eq!(similarity(0, 0, 0), 1.0);
/// assert_eq!(similarity(1, 4, 4), 0.75);
/// assert_eq!(similarity(3, 0, 3), 0.0);
/// ```
#[must_use]
pub fn similarity(distance: usize, lhs_len: usize, rhs_len: usize) -> f64 {
    let longest = max_len(lhs_len, rhs_len);
    if longest == 0 {
        return 1.0;
    }
    clamp_unit(1.0 - distance as f64 / longest as f64)
}

/// Outcome of running one [`Metric`] over a pair of strings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The metric that produced this measurement.
    pub metric: Metric,
    /// The edit distance.
    pub distance: usize,
    /// Normalized similarity, see [`similarity`].
    pub similarity: f64,
}

impl Metric {
    /// Computes this metric between `lhs` and `rhs`.
    ///
    /// Only [`Metric::Hamming`] can fail.
    ///
    /// ```
    /// # use editdist_core::{CompareOptions, Metric};
    /// let opts = CompareOptions::default();
    /// assert_eq!(Metric::DamerauLevenshtein.distance("ab", "ba", &opts)?, 1);
    /// assert_eq!(Metric::Levenshtein.distance("ab", "ba", &opts)?, 2);
    /// # Ok::<(), editdist_core::DistanceError>(())
    /// ```
    pub fn distance(
        self,
        lhs: &str,
        rhs: &str,
        options: &CompareOptions,
    ) -> Result<usize, DistanceError> {
        self.measure(lhs, rhs, options).map(|measurement| measurement.distance)
    }

    /// Computes this metric and wraps it with its normalized similarity.
    pub fn measure(
        self,
        lhs: &str,
        rhs: &str,
        options: &CompareOptions,
    ) -> Result<Measurement, DistanceError> {
        let lhs = code_points(lhs, options.case_sensitive());
        let rhs = code_points(rhs, options.case_sensitive());
        let distance = self.distance_between(&lhs, &rhs)?;
        let similarity = similarity(distance, lhs.len(), rhs.len());
        Ok(Measurement { metric: self, distance, similarity })
    }

    fn distance_between(self, lhs: &[char], rhs: &[char]) -> Result<usize, DistanceError> {
        trace!(metric = %self, lhs_len = lhs.len(), rhs_len = rhs.len(), "computing distance");
        let result = match self {
            Metric::Levenshtein => Ok(levenshtein_table::distance(lhs, rhs)),
            Metric::DamerauLevenshtein => Ok(damerau::distance(lhs, rhs)),
            Metric::Hamming => mismatch::distance(lhs, rhs),
        };
        match &result {
            Ok(distance) => debug!(metric = %self, distance, "distance computed"),
            Err(err) => debug!(metric = %self, %err, "distance rejected"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_free_functions() {
        let opts = CompareOptions::default().with_case_sensitive(false);
        let (lhs, rhs) = ("Saturday", "sunday");
        assert_eq!(Metric::Levenshtein.distance(lhs, rhs, &opts), Ok(levenshtein(lhs, rhs, false)));
        assert_eq!(
            Metric::DamerauLevenshtein.distance(lhs, rhs, &opts),
            Ok(damerau_levenshtein(lhs, rhs, false))
        );
        assert_eq!(Metric::Hamming.distance(lhs, rhs, &opts), hamming(lhs, rhs, false));
    }

    #[test]
    fn distance_agrees_with_measure() {
        let opts = CompareOptions::default().with_case_sensitive(false);
        for metric in Metric::ALL {
            let measured = metric.measure("İstanbul", "istanbul", &opts).map(|m| m.distance);
            assert_eq!(metric.distance("İstanbul", "istanbul", &opts), measured, "{metric}");
        }
    }

    #[test]
    fn measure_reports_similarity() {
        let opts = CompareOptions::default();
        let measurement = Metric::Hamming.measure("karolin", "kathrin", &opts).unwrap();
        assert_eq!(measurement.metric, Metric::Hamming);
        assert_eq!(measurement.distance, 3);
        assert!((measurement.similarity - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn measure_propagates_length_mismatch() {
        let err = Metric::Hamming.measure("abc", "ab", &CompareOptions::default()).unwrap_err();
        assert_eq!(err, DistanceError::LengthMismatch { left: 3, right: 2 });
    }

    #[test]
    fn similarity_uses_code_point_lengths() {
        let measurement =
            Metric::Levenshtein.measure("日本", "日", &CompareOptions::default()).unwrap();
        assert_eq!(measurement.distance, 1);
        assert_eq!(measurement.similarity, 0.5);
    }

    #[test]
    fn similarity_of_empty_inputs_is_one() {
        let measurement = Metric::Levenshtein.measure("", "", &CompareOptions::default()).unwrap();
        assert_eq!(measurement.distance, 0);
        assert_eq!(measurement.similarity, 1.0);
    }
}
