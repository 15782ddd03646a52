//! Placeholder token text: `__ESCAPED_URL_<NAMESPACE><index>[(<line>,<column>)]__`.

use super::error::UrlError;
use super::position::Waypoint;
use std::ops::Range;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "CLEAN_CSS";

const TOKEN_PREFIX: &str = "__ESCAPED_URL_";
const TOKEN_SUFFIX: &str = "__";

/// Checks that `namespace` can be embedded in a token unambiguously.
///
/// The index follows the namespace directly, so a trailing digit is rejected:
/// `PASS2` index 0 and `PASS` index 20 would both read `__ESCAPED_URL_PASS20__`.
pub fn validate_namespace(namespace: &str) -> Result<(), UrlError> {
    let valid = namespace
        .bytes()
        .last()
        .is_some_and(|b| !b.is_ascii_digit())
        && namespace
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(UrlError::InvalidNamespace(namespace.to_string()))
    }
}

/// Builds the token text for `index`, with the waypoint suffix when given.
pub fn format_placeholder(namespace: &str, index: usize, waypoint: Option<Waypoint>) -> String {
    match waypoint {
        Some(wp) => format!("{TOKEN_PREFIX}{namespace}{index}{wp}{TOKEN_SUFFIX}"),
        None => format!("{TOKEN_PREFIX}{namespace}{index}{TOKEN_SUFFIX}"),
    }
}

/// A token located in escaped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPlaceholder {
    pub index: usize,
    /// Byte range of the whole token, suffix included.
    pub range: Range<usize>,
    pub waypoint: Option<Waypoint>,
}

/// Finds the next well-formed token of `namespace` at or after byte `from`.
///
/// Text that starts like a token but does not complete the shape is skipped.
pub fn find_placeholder(text: &str, from: usize, namespace: &str) -> Option<FoundPlaceholder> {
    let prefix = format!("{TOKEN_PREFIX}{namespace}");
    let mut search = from;

    while let Some(rel) = text.get(search..)?.find(&prefix) {
        let start = search + rel;
        if let Some(found) = parse_token_body(text, start, start + prefix.len()) {
            return Some(found);
        }
        // Prefix starts with an ASCII byte, so this stays on a char boundary.
        search = start + 1;
    }

    None
}

fn parse_token_body(text: &str, start: usize, body: usize) -> Option<FoundPlaceholder> {
    let bytes = text.as_bytes();

    let digits_end = scan_digits(bytes, body);
    if digits_end == body {
        return None;
    }
    // Too many digits for usize cannot be an issued index; keep it so restore
    // reports it as unknown rather than passing it through.
    let index = text[body..digits_end].parse().unwrap_or(usize::MAX);

    let mut cursor = digits_end;
    let mut waypoint = None;
    if bytes.get(cursor) == Some(&b'(') {
        let (wp, next) = parse_waypoint(text, cursor + 1)?;
        waypoint = Some(wp);
        cursor = next;
    }

    if !text[cursor..].starts_with(TOKEN_SUFFIX) {
        return None;
    }

    Some(FoundPlaceholder {
        index,
        range: start..cursor + TOKEN_SUFFIX.len(),
        waypoint,
    })
}

/// Parses `<line>,<column>)` starting at `at`; returns the waypoint and the
/// byte after `)`.
fn parse_waypoint(text: &str, at: usize) -> Option<(Waypoint, usize)> {
    let bytes = text.as_bytes();

    let line_end = scan_digits(bytes, at);
    if line_end == at || bytes.get(line_end) != Some(&b',') {
        return None;
    }
    let column_start = line_end + 1;
    let column_end = scan_digits(bytes, column_start);
    if column_end == column_start || bytes.get(column_end) != Some(&b')') {
        return None;
    }

    let waypoint = Waypoint {
        line_offset: text[at..line_end].parse().unwrap_or(usize::MAX),
        column_offset: text[column_start..column_end].parse().unwrap_or(usize::MAX),
    };
    Some((waypoint, column_end + 1))
}

fn scan_digits(bytes: &[u8], mut at: usize) -> usize {
    while bytes.get(at).is_some_and(u8::is_ascii_digit) {
        at += 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_and_with_waypoint() {
        assert_eq!(
            format_placeholder(DEFAULT_NAMESPACE, 0, None),
            "__ESCAPED_URL_CLEAN_CSS0__"
        );
        let wp = Waypoint {
            line_offset: 2,
            column_offset: 10,
        };
        assert_eq!(
            format_placeholder(DEFAULT_NAMESPACE, 3, Some(wp)),
            "__ESCAPED_URL_CLEAN_CSS3(2,10)__"
        );
    }

    #[test]
    fn finds_plain_token() {
        let text = "div{background:__ESCAPED_URL_CLEAN_CSS12__ repeat}";
        let found = find_placeholder(text, 0, DEFAULT_NAMESPACE).unwrap();
        assert_eq!(found.index, 12);
        assert_eq!(&text[found.range.clone()], "__ESCAPED_URL_CLEAN_CSS12__");
        assert!(found.waypoint.is_none());
    }

    #[test]
    fn finds_token_with_waypoint() {
        let text = "x__ESCAPED_URL_CLEAN_CSS0(0,18)__y";
        let found = find_placeholder(text, 0, DEFAULT_NAMESPACE).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.range, 1..text.len() - 1);
        assert_eq!(
            found.waypoint,
            Some(Waypoint {
                line_offset: 0,
                column_offset: 18
            })
        );
    }

    #[test]
    fn respects_start_offset() {
        let text = "__ESCAPED_URL_CLEAN_CSS0__ __ESCAPED_URL_CLEAN_CSS1__";
        let first = find_placeholder(text, 0, DEFAULT_NAMESPACE).unwrap();
        let second = find_placeholder(text, first.range.end, DEFAULT_NAMESPACE).unwrap();
        assert_eq!(second.index, 1);
        assert!(find_placeholder(text, second.range.end, DEFAULT_NAMESPACE).is_none());
    }

    #[test]
    fn skips_incomplete_shapes() {
        assert!(find_placeholder("__ESCAPED_URL_CLEAN_CSS__", 0, DEFAULT_NAMESPACE).is_none());
        assert!(find_placeholder("__ESCAPED_URL_CLEAN_CSS1", 0, DEFAULT_NAMESPACE).is_none());
        assert!(find_placeholder("__ESCAPED_URL_CLEAN_CSS1(2)__", 0, DEFAULT_NAMESPACE).is_none());
        assert!(find_placeholder("__ESCAPED_URL_CLEAN_CSS1(2,)__", 0, DEFAULT_NAMESPACE).is_none());

        let text = "__ESCAPED_URL_CLEAN_CSS __ESCAPED_URL_CLEAN_CSS4__";
        assert_eq!(find_placeholder(text, 0, DEFAULT_NAMESPACE).unwrap().index, 4);
    }

    #[test]
    fn oversized_index_is_still_a_token() {
        let text = "a __ESCAPED_URL_CLEAN_CSS99999999999999999999999999__ b";
        let found = find_placeholder(text, 0, DEFAULT_NAMESPACE).unwrap();
        assert_eq!(found.index, usize::MAX);
        assert_eq!(found.range, 2..text.len() - 2);
    }

    #[test]
    fn ignores_other_namespaces() {
        let text = "__ESCAPED_URL_OTHER0__";
        assert!(find_placeholder(text, 0, DEFAULT_NAMESPACE).is_none());
        assert_eq!(find_placeholder(text, 0, "OTHER").unwrap().index, 0);
    }

    #[test]
    fn validates_namespace() {
        assert!(validate_namespace("CLEAN_CSS").is_ok());
        assert!(validate_namespace("pass_b").is_ok());
        assert_eq!(
            validate_namespace(""),
            Err(UrlError::InvalidNamespace(String::new()))
        );
        assert!(validate_namespace("has space").is_err());
        assert!(validate_namespace("PASS2").is_err());
        assert!(validate_namespace("2").is_err());
        assert!(validate_namespace("PASS_2B").is_ok());
        assert!(validate_namespace("a(b").is_err());
    }
}
