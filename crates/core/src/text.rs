//! Whitespace trimming and separator splitting.

/// Removes leading and trailing whitespace.
#[must_use]
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Removes trailing whitespace, leaving any leading whitespace in place.
#[must_use]
pub fn trim_right(s: &str) -> String {
    s.trim_end().to_string()
}

/// Splits `s` on every occurrence of `sep`, dropping empty segments.
///
/// Consecutive, leading and trailing separators never produce empty entries.
/// A string without the separator comes back as a single element.
///
/// # Examples
///
/// ```
/// use cmdkit_core::text::sep_split;
///
/// assert_eq!(sep_split("foo,,bar,", ","), vec!["foo", "bar"]);
/// assert_eq!(sep_split("foo#bar", ","), vec!["foo#bar"]);
/// ```
#[must_use]
pub fn sep_split(s: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return if s.is_empty() {
            Vec::new()
        } else {
            vec![s.to_string()]
        };
    }

    s.split(sep)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Shorthand for [`sep_split`] with a `,` separator.
#[must_use]
pub fn comma_split(s: &str) -> Vec<String> {
    sep_split(s, ",")
}
