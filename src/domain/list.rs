//! Delimited list codec for list-kind parameters
//!
//! Entries are joined by a single delimiter character. A backslash directly
//! before the delimiter makes it literal; every other backslash is kept as is,
//! so regex escapes like `\d` pass through untouched. As a consequence an entry
//! cannot end in a backslash when another entry follows it; [`join_escaped`]
//! refuses such lists.

use itertools::Itertools;

/// Default list delimiter.
pub const DEFAULT_DELIMITER: char = '#';

const ESCAPE: char = '\\';

/// Split `raw` on `delimiter`, honouring `\<delimiter>` escapes.
///
/// Empty input yields an empty list; empty entries between delimiters are kept.
pub fn split_escaped(raw: &str, delimiter: char) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE && chars.peek() == Some(&delimiter) {
            current.push(delimiter);
            chars.next();
        } else if c == delimiter {
            entries.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    entries.push(current);
    entries
}

/// Inverse of [`split_escaped`]: escape embedded delimiters and join.
///
/// Returns `None` when an entry other than the last ends in a backslash, since
/// that backslash would escape the following delimiter.
pub fn join_escaped<S: AsRef<str>>(entries: &[S], delimiter: char) -> Option<String> {
    if let Some((_, init)) = entries.split_last() {
        if init.iter().any(|e| e.as_ref().ends_with(ESCAPE)) {
            return None;
        }
    }

    let escaped = format!("{ESCAPE}{delimiter}");
    Some(
        entries
            .iter()
            .map(|e| e.as_ref().replace(delimiter, &escaped))
            .join(&delimiter.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_escaped_delimiter_when_splitting_then_keeps_it_literal() {
        let entries = split_escaped(r"a\#b#c", '#');
        assert_eq!(entries, vec!["a#b".to_string(), "c".to_string()]);
    }

    #[test]
    fn given_split_entries_when_joining_then_reproduces_original() {
        let raw = r"a\#b#c";
        let entries = split_escaped(raw, '#');
        assert_eq!(join_escaped(&entries, '#').as_deref(), Some(raw));
    }

    #[rstest]
    #[case(vec![r"a\", "b"])]
    #[case(vec!["x", r"\", "y"])]
    fn given_inner_entry_ending_in_backslash_when_joining_then_refused(#[case] entries: Vec<&str>) {
        assert_eq!(join_escaped(&entries, '#'), None);
    }

    #[rstest]
    #[case(vec![r"trailing\"])]
    #[case(vec!["a#b", r"c\"])]
    #[case(vec![r"^\d+$", "x"])]
    #[case(vec![])]
    fn given_representable_entries_when_joining_then_split_recovers_them(
        #[case] entries: Vec<&str>,
    ) {
        let joined = join_escaped(&entries, '#').unwrap();
        assert_eq!(split_escaped(&joined, '#'), entries);
    }

    #[test]
    fn given_backslash_before_escaped_delimiter_when_splitting_then_only_last_escapes() {
        let entries = split_escaped(r"a\\#b", '#');
        assert_eq!(entries, vec![r"a\#b".to_string()]);
    }

    #[rstest]
    #[case("", vec![])]
    #[case("single", vec!["single"])]
    #[case("a#b", vec!["a", "b"])]
    #[case("#", vec!["", ""])]
    #[case(r"^\d+$#foo", vec![r"^\d+$", "foo"])]
    #[case(r"trailing\", vec![r"trailing\"])]
    fn given_raw_list_when_splitting_then_yields_entries(
        #[case] raw: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(split_escaped(raw, '#'), expected);
    }

    #[test]
    fn given_custom_delimiter_when_splitting_then_ignores_hash() {
        let entries = split_escaped(r"a#b;c\;d", ';');
        assert_eq!(entries, vec!["a#b", "c;d"]);
    }
}
