//! Locates `url(...)` occurrences and their matching close, honoring quotes.

use serde::Serialize;
use std::ops::Range;

const URL_PREFIX: &[u8] = b"url(";

/// Delimiter wrapping a url's content, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    #[default]
    None,
    Single,
    Double,
}

impl QuoteKind {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'\'' => Some(QuoteKind::Single),
            b'"' => Some(QuoteKind::Double),
            _ => None,
        }
    }

    /// Quote character for this kind; `None` for unquoted content.
    pub fn delimiter(self) -> Option<char> {
        match self {
            QuoteKind::None => None,
            QuoteKind::Single => Some('\''),
            QuoteKind::Double => Some('"'),
        }
    }
}

/// One `url(...)` occurrence located in a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSpan {
    /// The whole occurrence, from `u` through the closing `)` (half-open byte range).
    pub span: Range<usize>,
    /// Content between the opening delimiter and the closing one, exclusive of quotes.
    pub content: Range<usize>,
    pub quote: QuoteKind,
}

impl UrlSpan {
    /// The full `url(...)` text as it appears in `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    /// The raw, unnormalized content as it appears in `source`.
    pub fn raw_content<'a>(&self, source: &'a str) -> &'a str {
        &source[self.content.clone()]
    }
}

/// Scans `text` for case-insensitive `url(` occurrences, left to right.
///
/// Quoted content extends to the next unescaped matching quote, then to the
/// `)` after it (only whitespace may sit in between). Unquoted content ends at
/// the first `)`. Occurrences with no valid close are skipped and the text
/// after their `url(` is scanned again.
pub fn scan_urls(text: &str) -> Vec<UrlSpan> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut cursor = 0;

    while let Some(start) = find_prefix(bytes, cursor) {
        let open = start + URL_PREFIX.len();
        match match_at(bytes, start, open) {
            Outcome::Found(found) => {
                cursor = found.span.end;
                out.push(found);
            }
            Outcome::Malformed => {
                tracing::warn!(offset = start, "malformed url( left untouched");
                cursor = open;
            }
            Outcome::Exhausted => {
                tracing::warn!(offset = start, "no closing ) after url(; rest left untouched");
                break;
            }
        }
    }

    out
}

enum Outcome {
    Found(UrlSpan),
    Malformed,
    /// No `)` follows, so no later occurrence can close either.
    Exhausted,
}

fn find_prefix(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(URL_PREFIX.len())
        .position(|w| w.eq_ignore_ascii_case(URL_PREFIX))
        .map(|i| from + i)
}

fn match_at(bytes: &[u8], start: usize, open: usize) -> Outcome {
    let first = skip_whitespace(bytes, open);

    match bytes.get(first).copied().and_then(QuoteKind::from_byte) {
        Some(quote) => {
            let content_start = first + 1;
            let Some(quote_end) = find_closing_quote(bytes, content_start, bytes[first]) else {
                return Outcome::Malformed;
            };
            let close = skip_whitespace(bytes, quote_end + 1);
            if bytes.get(close) != Some(&b')') {
                return Outcome::Malformed;
            }
            Outcome::Found(UrlSpan {
                span: start..close + 1,
                content: content_start..quote_end,
                quote,
            })
        }
        None => match bytes[open..].iter().position(|&b| b == b')') {
            Some(rel) => Outcome::Found(UrlSpan {
                span: start..open + rel + 1,
                content: open..open + rel,
                quote: QuoteKind::None,
            }),
            None => Outcome::Exhausted,
        },
    }
}

fn skip_whitespace(bytes: &[u8], mut at: usize) -> usize {
    while matches!(bytes.get(at), Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')) {
        at += 1;
    }
    at
}

/// Index of the next `quote` byte not preceded by an odd run of backslashes.
///
/// An opening quote always follows `(` or whitespace, so it is never escaped
/// and ends any search for its kind started earlier: each byte is scanned at
/// most once per quote kind across a whole `scan_urls` pass.
fn find_closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if escaped {
            escaped = false;
        } else if b == b'\\' {
            escaped = true;
        } else if b == quote {
            return Some(i);
        }
    }
    None
}
