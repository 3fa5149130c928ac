//! Fuzzing harnesses for `editdist`.
//!
//! Each public function accepts raw bytes, derives a pair of strings from
//! them and checks the metric laws that must hold for every input. A law
//! violation panics so that `cargo fuzz` records the input as a crash.
//!
//! # Examples
//!
//! ```
//! editdist_fuzz::fuzz_distances(b"kitten sitting");
//! editdist_fuzz::fuzz_case_folding(&[0x41, 0x62, 0xc3, 0x9c]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use editdist_core::{code_points, damerau_levenshtein, hamming, levenshtein, DistanceError};

const MAX_STRING_LEN: u8 = 24;

/// Code points mixed into generated strings: ASCII, Latin-1 with case,
/// combining marks, CJK and astral-plane symbols.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'A', 'B', 'x', ' ', 'é', 'É', 'ß', 'İ', '\u{301}', '日', '本', '🙂', '𝔸',
];

/// Runs every metric over two generated strings and checks symmetry,
/// identity, length bounds and that transpositions never increase cost.
///
/// ```
/// editdist_fuzz::fuzz_distances(b"seed");
/// ```
pub fn fuzz_distances(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Ok(lhs) = random_string(&mut unstructured) else {
        return;
    };
    let Ok(rhs) = random_string(&mut unstructured) else {
        return;
    };
    let case_sensitive = unstructured.arbitrary::<bool>().unwrap_or(true);

    let m = code_points(&lhs, case_sensitive).len();
    let n = code_points(&rhs, case_sensitive).len();

    let lev = levenshtein(&lhs, &rhs, case_sensitive);
    assert_eq!(lev, levenshtein(&rhs, &lhs, case_sensitive), "levenshtein symmetry");
    assert!(lev >= m.abs_diff(n), "levenshtein below length difference");
    assert!(lev <= m.max(n), "levenshtein above longest length");
    assert_eq!(levenshtein(&lhs, &lhs, case_sensitive), 0, "levenshtein identity");

    let dl = damerau_levenshtein(&lhs, &rhs, case_sensitive);
    assert_eq!(dl, damerau_levenshtein(&rhs, &lhs, case_sensitive), "damerau symmetry");
    assert!(dl <= lev, "damerau-levenshtein exceeds levenshtein");
    assert!(dl >= m.abs_diff(n), "damerau-levenshtein below length difference");
    assert_eq!(damerau_levenshtein(&lhs, &lhs, case_sensitive), 0, "damerau identity");

    match hamming(&lhs, &rhs, case_sensitive) {
        Ok(ham) => {
            assert_eq!(m, n, "hamming accepted unequal lengths");
            assert!(lev <= ham && ham <= m, "hamming outside [levenshtein, length]");
        }
        Err(DistanceError::LengthMismatch { left, right }) => {
            assert_eq!((left, right), (m, n), "hamming reported wrong lengths");
            assert_ne!(m, n, "hamming rejected equal lengths");
        }
    }
}

/// Checks that case-insensitive comparison equals case-sensitive comparison
/// of the pre-lowercased inputs.
///
/// ```
/// editdist_fuzz::fuzz_case_folding(b"case");
/// ```
pub fn fuzz_case_folding(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let (Ok(lhs), Ok(rhs)) = (random_string(&mut unstructured), random_string(&mut unstructured))
    else {
        return;
    };
    let (lower_lhs, lower_rhs) = (lhs.to_lowercase(), rhs.to_lowercase());

    assert_eq!(levenshtein(&lhs, &rhs, false), levenshtein(&lower_lhs, &lower_rhs, true));
    assert_eq!(
        damerau_levenshtein(&lhs, &rhs, false),
        damerau_levenshtein(&lower_lhs, &lower_rhs, true)
    );
    assert_eq!(hamming(&lhs, &rhs, false), hamming(&lower_lhs, &lower_rhs, true));
}

fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        string.push(*unstructured.choose(ALPHABET)?);
    }
    Ok(string)
}
