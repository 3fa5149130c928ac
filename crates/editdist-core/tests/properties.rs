use std::collections::HashMap;

use editdist_core::{damerau_levenshtein, hamming, levenshtein};
use proptest::prelude::*;
use proptest::string::string_regex;

/// Lowrance–Wagner with sentinel borders, written independently of the
/// library's indexing.
fn reference_damerau(lhs: &[char], rhs: &[char]) -> usize {
    let (m, n) = (lhs.len(), rhs.len());
    let max = m + n;
    let mut d = vec![vec![0usize; n + 2]; m + 2];
    d[0][0] = max;
    for i in 0..=m {
        d[i + 1][0] = max;
        d[i + 1][1] = i;
    }
    for j in 0..=n {
        d[0][j + 1] = max;
        d[1][j + 1] = j;
    }
    let mut da: HashMap<char, usize> = HashMap::new();
    for i in 1..=m {
        let mut db = 0;
        for j in 1..=n {
            let i1 = da.get(&rhs[j - 1]).copied().unwrap_or(0);
            let j1 = db;
            let cost = if lhs[i - 1] == rhs[j - 1] {
                db = j;
                0
            } else {
                1
            };
            d[i + 1][j + 1] = (d[i][j] + cost)
                .min(d[i + 1][j] + 1)
                .min(d[i][j + 1] + 1)
                .min(d[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1));
        }
        da.insert(lhs[i - 1], i);
    }
    d[m + 1][n + 1]
}

/// Two-row Levenshtein.
fn reference_levenshtein(lhs: &[char], rhs: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=rhs.len()).collect();
    let mut current = vec![0; rhs.len() + 1];
    for (i, a) in lhs.iter().enumerate() {
        current[0] = i + 1;
        for (j, b) in rhs.iter().enumerate() {
            let substitution = previous[j] + usize::from(a != b);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[rhs.len()]
}

fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

/// Small alphabet so repeats and transpositions are common.
fn small_alphabet() -> impl Strategy<Value = String> {
    string_regex("[abcAB日🙂]{0,8}").unwrap()
}

fn equal_length_pair() -> impl Strategy<Value = (String, String)> {
    (0usize..10).prop_flat_map(|len| {
        let symbols = prop::sample::select(vec!['a', 'b', 'C', 'é', '本']);
        let side = proptest::collection::vec(symbols, len)
            .prop_map(|chars| chars.into_iter().collect::<String>());
        (side.clone(), side)
    })
}

proptest! {
    #[test]
    fn levenshtein_matches_reference(a in small_alphabet(), b in small_alphabet()) {
        let expected = reference_levenshtein(&chars(&a), &chars(&b));
        prop_assert_eq!(levenshtein(&a, &b, true), expected);
    }

    #[test]
    fn damerau_matches_reference(a in small_alphabet(), b in small_alphabet()) {
        let expected = reference_damerau(&chars(&a), &chars(&b));
        prop_assert_eq!(damerau_levenshtein(&a, &b, true), expected);
    }

    #[test]
    fn metrics_are_symmetric(a in small_alphabet(), b in small_alphabet()) {
        prop_assert_eq!(levenshtein(&a, &b, true), levenshtein(&b, &a, true));
        prop_assert_eq!(damerau_levenshtein(&a, &b, true), damerau_levenshtein(&b, &a, true));
    }

    #[test]
    fn hamming_is_symmetric((a, b) in equal_length_pair()) {
        prop_assert_eq!(hamming(&a, &b, true), hamming(&b, &a, true));
    }

    #[test]
    fn identical_inputs_have_zero_distance(a in small_alphabet()) {
        prop_assert_eq!(levenshtein(&a, &a, true), 0);
        prop_assert_eq!(damerau_levenshtein(&a, &a, true), 0);
        prop_assert_eq!(hamming(&a, &a, true), Ok(0));
    }

    #[test]
    fn levenshtein_is_bounded_by_lengths(a in small_alphabet(), b in small_alphabet()) {
        let (m, n) = (a.chars().count(), b.chars().count());
        let distance = levenshtein(&a, &b, true);
        prop_assert!(distance >= m.abs_diff(n));
        prop_assert!(distance <= m.max(n));
    }

    #[test]
    fn transpositions_never_cost_more(a in small_alphabet(), b in small_alphabet()) {
        prop_assert!(damerau_levenshtein(&a, &b, true) <= levenshtein(&a, &b, true));
    }

    #[test]
    fn levenshtein_triangle_inequality(
        a in small_alphabet(),
        b in small_alphabet(),
        c in small_alphabet(),
    ) {
        let direct = levenshtein(&a, &c, true);
        prop_assert!(direct <= levenshtein(&a, &b, true) + levenshtein(&b, &c, true));
    }

    #[test]
    fn hamming_bounds_levenshtein((a, b) in equal_length_pair()) {
        let ham = hamming(&a, &b, true).unwrap();
        prop_assert!(levenshtein(&a, &b, true) <= ham);
        prop_assert!(ham <= a.chars().count());
    }

    #[test]
    fn case_insensitive_matches_prelowered(a in small_alphabet(), b in small_alphabet()) {
        let (la, lb) = (a.to_lowercase(), b.to_lowercase());
        prop_assert_eq!(levenshtein(&a, &b, false), levenshtein(&la, &lb, true));
        prop_assert_eq!(
            damerau_levenshtein(&a, &b, false),
            damerau_levenshtein(&la, &lb, true)
        );
        prop_assert_eq!(hamming(&a, &b, false), hamming(&la, &lb, true));
    }

    #[test]
    fn adjacent_swap_costs_one(prefix in small_alphabet(), suffix in small_alphabet()) {
        let lhs = format!("{prefix}xy{suffix}");
        let rhs = format!("{prefix}yx{suffix}");
        prop_assert_eq!(damerau_levenshtein(&lhs, &rhs, true), 1);
    }
}
