//! Benchmark corpora for `editdist`.
//!
//! Each [`Corpus`] is a named, deterministic list of string pairs. Pairs in
//! a corpus share a length so that Hamming distance can run over them too.
//!
//! # Examples
//!
//! ```
//! let corpus = editdist_benches::available_corpora()
//!     .into_iter()
//!     .find(|corpus| corpus.name() == "typos")
//!     .expect("registered corpus");
//! assert!(!corpus.pairs().is_empty());
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use editdist_core::{CompareOptions, DistanceError, Metric};

/// A named set of string pairs to benchmark against.
#[derive(Clone, Debug)]
pub struct Corpus {
    name: &'static str,
    pairs: Vec<(String, String)>,
}

impl Corpus {
    /// Short identifier used as the criterion benchmark id.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pairs in this corpus.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Total code points across both sides of every pair.
    #[must_use]
    pub fn code_points(&self) -> usize {
        self.pairs.iter().map(|(lhs, rhs)| lhs.chars().count() + rhs.chars().count()).sum()
    }

    /// Sums `metric` over every pair.
    pub fn total_distance(
        &self,
        metric: Metric,
        options: &CompareOptions,
    ) -> Result<usize, DistanceError> {
        let mut total = 0;
        for (lhs, rhs) in &self.pairs {
            total += metric.distance(lhs, rhs, options)?;
        }
        Ok(total)
    }
}

const TYPOS: &[(&str, &str)] = &[
    ("receive", "recieve"),
    ("separate", "seperate"),
    ("definitely", "definately"),
    ("the", "teh"),
    ("weird", "wierd"),
    ("calendar", "calender"),
    ("believe", "beleive"),
    ("friend", "freind"),
];

/// Returns every built-in corpus.
#[must_use]
pub fn available_corpora() -> Vec<Corpus> {
    vec![
        Corpus {
            name: "typos",
            pairs: TYPOS.iter().map(|(lhs, rhs)| (lhs.to_string(), rhs.to_string())).collect(),
        },
        Corpus {
            name: "shuffled-ascii-64",
            pairs: shuffled_pairs(&['a', 'b', 'c', 'd', 'e'], 64, 16),
        },
        Corpus { name: "shuffled-cjk-64", pairs: shuffled_pairs(&['日', '本', '語', '🙂'], 64, 16) },
        Corpus { name: "shuffled-ascii-256", pairs: shuffled_pairs(&['a', 'b', 'c', 'd'], 256, 4) },
    ]
}

/// Builds `count` pairs of `len` symbols where the right side is the left
/// side with every third adjacent pair swapped and every seventh symbol
/// replaced, driven by a fixed linear congruential sequence.
fn shuffled_pairs(alphabet: &[char], len: usize, count: usize) -> Vec<(String, String)> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let lhs: Vec<char> = (0..len).map(|_| alphabet[next() % alphabet.len()]).collect();
            let mut rhs = lhs.clone();
            for i in (0..len.saturating_sub(1)).step_by(3) {
                rhs.swap(i, i + 1);
            }
            for i in (0..len).step_by(7) {
                rhs[i] = alphabet[next() % alphabet.len()];
            }
            (lhs.into_iter().collect(), rhs.into_iter().collect())
        })
        .collect()
}
