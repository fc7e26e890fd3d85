//! Utilities for comparing an output file against expectations using a
//! unified diff.
//!
//! Tool test cases often describe an expected output file as "the input file
//! plus these lines". Given the lines of a unified diff between the input and
//! the output, [`added_lines`] recovers the lines the tool inserted, and
//! [`new_lines_match`] compares them with the expected ones.

/// Unified diff lines starting with these prefixes are headers, not content.
const HEADER_PREFIXES: [&str; 3] = ["+++", "---", "@@ "];

/// Extracts the content of every added line in a unified diff. Headers are
/// skipped, and the surrounding whitespace of each added line is trimmed
/// before the leading `+` is dropped.
///
/// ```
/// use ngs_formats::utils::diff::added_lines;
///
/// let diff = ["--- input.txt", "+++ output.txt", "@@ -1,2 +1,3 @@", " a", "+abc", " b"];
/// assert_eq!(added_lines(diff), vec!["abc"]);
/// ```
pub fn added_lines<I, S>(diff: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    diff.into_iter()
        .filter_map(|line| {
            let line = line.as_ref();

            if HEADER_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
                return None;
            }

            line.starts_with('+')
                .then(|| line.trim()[1..].to_string())
        })
        .collect()
}

/// Whether the lines added in `diff` are exactly `expected`, in order.
pub fn new_lines_match<I, S, E>(diff: I, expected: &[E]) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: AsRef<str>,
{
    let added = added_lines(diff);

    added.len() == expected.len()
        && added
            .iter()
            .zip(expected)
            .all(|(actual, expected)| actual == expected.as_ref())
}
