//! Edit distances between Unicode strings.
//!
//! `editdist-core` computes Levenshtein, true (unrestricted)
//! Damerau-Levenshtein and Hamming distances. Every metric compares Unicode
//! code points rather than bytes, and every metric can optionally fold case
//! before comparing.
//!
//! ```
//! use editdist_core::{damerau_levenshtein, hamming, levenshtein};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     assert_eq!(levenshtein("kitten", "sitting", true), 3);
//!     assert_eq!(damerau_levenshtein("ca", "abc", true), 2);
//!     assert_eq!(hamming("karolin", "kathrin", true)?, 3);
//!     assert!(hamming("abc", "ab", true).is_err());
//!     Ok(())
//! }
//! ```
//!
//! The [`Metric`] enum selects a metric at runtime and produces a
//! [`Measurement`] that also carries a normalized similarity:
//!
//! ```
//! use editdist_core::{CompareOptions, Metric};
//!
//! let opts = CompareOptions::default().with_case_sensitive(false);
//! let measurement = Metric::Levenshtein.measure("Hello", "hallo", &opts)?;
//! assert_eq!(measurement.distance, 1);
//! assert!((measurement.similarity - 0.8).abs() < f64::EPSILON);
//! # Ok::<(), editdist_core::DistanceError>(())
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod distance;
mod error;
mod matrix;
mod normalize;
mod numeric;
mod options;

pub use distance::{damerau_levenshtein, hamming, levenshtein, similarity, Measurement};
pub use error::{DistanceError, MetricParseError};
pub use normalize::code_points;
pub use options::{CompareOptions, Metric};

/// Returns the semantic version of the `editdist-core` crate.
///
/// ```
/// assert!(!editdist_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
