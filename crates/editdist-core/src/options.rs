use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MetricParseError;

/// Selects which edit distance to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Insertions, deletions and substitutions (default).
    Levenshtein,
    /// Levenshtein plus unit-cost transposition of adjacent symbols, with no
    /// restriction on editing a transposed pair again.
    DamerauLevenshtein,
    /// Positional mismatches between equal-length inputs.
    Hamming,
}

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Metric; 3] = [Metric::Levenshtein, Metric::DamerauLevenshtein, Metric::Hamming];

    /// Canonical kebab-case name, matching the serde representation.
    ///
    /// ```
    /// # use editdist_core::Metric;
    /// assert_eq!(Metric::DamerauLevenshtein.name(), "damerau-levenshtein");
    /// ```
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::DamerauLevenshtein => "damerau-levenshtein",
            Metric::Hamming => "hamming",
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::Levenshtein
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = MetricParseError;

    /// Parses a metric name, ignoring ASCII case and accepting `_` for `-`.
    ///
    /// ```
    /// # use editdist_core::Metric;
    /// assert_eq!("Damerau_Levenshtein".parse::<Metric>()?, Metric::DamerauLevenshtein);
    /// assert_eq!("lev".parse::<Metric>()?, Metric::Levenshtein);
    /// assert!("jaro".parse::<Metric>().is_err());
    /// # Ok::<(), editdist_core::MetricParseError>(())
    /// ```
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "levenshtein" | "lev" => Ok(Metric::Levenshtein),
            "damerau-levenshtein" | "damerau" | "dl" => Ok(Metric::DamerauLevenshtein),
            "hamming" | "ham" => Ok(Metric::Hamming),
            _ => Err(MetricParseError { name: raw.to_string() }),
        }
    }
}

/// Knobs shared by every metric.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    case_sensitive: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { case_sensitive: true }
    }
}

impl CompareOptions {
    /// Returns whether inputs are compared without case folding.
    ///
    /// ```
    /// # use editdist_core::CompareOptions;
    /// assert!(CompareOptions::default().case_sensitive());
    /// ```
    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Sets case sensitivity. When `false`, both inputs are lowercased before
    /// they are split into code points.
    ///
    /// ```
    /// # use editdist_core::CompareOptions;
    /// let opts = CompareOptions::default().with_case_sensitive(false);
    /// assert!(!opts.case_sensitive());
    /// ```
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
