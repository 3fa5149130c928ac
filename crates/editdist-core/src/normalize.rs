/// Splits `input` into the code-point sequence the distance functions compare.
///
/// When `case_sensitive` is `false` the input is lowercased first using the
/// full Unicode mapping, so a single code point may expand into several
/// (`'İ'` becomes `"i\u{307}"`). No normalization form is applied and
/// whitespace is kept as-is.
///
/// ```
/// # use editdist_core::code_points;
/// assert_eq!(code_points("Straße", false), vec!['s', 't', 'r', 'a', 'ß', 'e']);
/// assert_eq!(code_points("日本", true).len(), 2);
/// ```
#[must_use]
pub fn code_points(input: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        input.chars().collect()
    } else {
        input.to_lowercase().chars().collect()
    }
}
