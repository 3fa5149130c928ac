//! Unrestricted Damerau-Levenshtein distance (Lowrance–Wagner).
//!
//! Rows and columns are 1-based prefix lengths throughout: cell `(i, j)`
//! covers `lhs[..i]` and `rhs[..j]`, and the symbol "at row `i`" is
//! `lhs[i - 1]`. Recorded positions use the same convention, so a
//! transposition whose earlier pair sits at row `k`, column `l` resumes from
//! cell `(k - 1, l - 1)` with no clamping.

use std::collections::HashMap;

use crate::matrix::DistanceMatrix;
use crate::numeric::min_cost;

pub(super) fn distance(lhs: &[char], rhs: &[char]) -> usize {
    let (m, n) = (lhs.len(), rhs.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Exceeds any real distance; stands in for "no transposition available".
    let infinity = m + n;
    let mut table = DistanceMatrix::with_borders(m, n);

    // Last row whose symbol equals the key, over rows before the current one.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=m {
        let lhs_char = lhs[i - 1];
        // Last column in this row, before the current one, where rhs matched lhs_char.
        let mut last_match_col: Option<usize> = None;

        for j in 1..=n {
            let rhs_char = rhs[j - 1];
            let earlier_row = last_row.get(&rhs_char).copied();
            let earlier_col = last_match_col;

            let substitution = if lhs_char == rhs_char {
                last_match_col = Some(j);
                table[(i - 1, j - 1)]
            } else {
                table[(i - 1, j - 1)] + 1
            };
            let deletion = table[(i - 1, j)] + 1;
            let insertion = table[(i, j - 1)] + 1;

            let transposition = match (earlier_row, earlier_col) {
                (Some(k), Some(l)) => table[(k - 1, l - 1)] + (i - k - 1) + 1 + (j - l - 1),
                _ => infinity,
            };

            table[(i, j)] = min_cost([deletion, insertion, substitution, transposition]);
        }

        last_row.insert(lhs_char, i);
    }

    table.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dl(lhs: &str, rhs: &str) -> usize {
        let lhs: Vec<char> = lhs.chars().collect();
        let rhs: Vec<char> = rhs.chars().collect();
        distance(&lhs, &rhs)
    }

    #[test]
    fn empty_sides_cost_the_other_length() {
        assert_eq!(dl("", ""), 0);
        assert_eq!(dl("abc", ""), 3);
        assert_eq!(dl("", "abcd"), 4);
    }

    #[test]
    fn single_symbols() {
        assert_eq!(dl("a", "a"), 0);
        assert_eq!(dl("a", "b"), 1);
    }

    #[test]
    fn adjacent_swap_costs_one() {
        assert_eq!(dl("ab", "ba"), 1);
        assert_eq!(dl("abcd", "bacd"), 1);
        assert_eq!(dl("abcd", "abdc"), 1);
    }

    #[test]
    fn transposed_pair_can_be_edited_again() {
        // ca -> ac -> abc; optimal string alignment would report 3.
        assert_eq!(dl("ca", "abc"), 2);
        assert_eq!(dl("abc", "ca"), 2);
    }

    #[test]
    fn independent_swaps_count_once_each() {
        assert_eq!(dl("abcd", "badc"), 2);
        assert_eq!(dl("abcdef", "badcfe"), 3);
    }

    #[test]
    fn swap_with_gap_between_pairs() {
        // a and b trade places across one symbol on each side: delete x, swap, insert y.
        assert_eq!(dl("axb", "bya"), 3);
        assert_eq!(dl("abxy", "bxya"), 2);
    }

    #[test]
    fn repeated_symbols_use_latest_occurrence() {
        assert_eq!(dl("aab", "aba"), 1);
        assert_eq!(dl("abab", "baba"), 2);
        assert_eq!(dl("aaaa", "aaaa"), 0);
    }

    #[test]
    fn stale_row_matches_do_not_leak_into_next_row() {
        // Row for 'b' must not see the column where 'a' matched in the previous row.
        assert_eq!(dl("ab", "aa"), 1);
        assert_eq!(dl("ba", "aab"), 2);
    }

    #[test]
    fn swap_of_first_symbols_has_no_prefix_cost() {
        assert_eq!(dl("ba", "ab"), 1);
        assert_eq!(dl("bac", "abc"), 1);
    }

    #[test]
    fn multibyte_code_points_are_single_units() {
        assert_eq!(dl("日本", "本日"), 1);
        assert_eq!(dl("🙂x", "x🙂"), 1);
    }
}
