//! Canonical restored form of a matched url.

use super::matcher::QuoteKind;

/// Result of normalizing one url's raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Full `url(...)` text to emit on restore.
    pub restored: String,
    /// Whether the content cannot be written unquoted.
    pub requires_quote: bool,
}

/// Normalizes `raw` content into its restored `url(...)` form.
///
/// Line breaks are removed everywhere, then spaces and tabs are trimmed from
/// both ends. Quotes are dropped unless the remaining content holds a blank,
/// a parenthesis or a quote character; in that case the author's original
/// quote character is kept.
pub fn normalize(raw: &str, quote: QuoteKind) -> Normalized {
    let joined: String = raw.chars().filter(|c| !is_line_break(*c)).collect();
    let trimmed = joined.trim_matches(is_blank);
    let requires_quote = trimmed.chars().any(needs_quoting);

    let restored = match quote.delimiter() {
        Some(q) if requires_quote => format!("url({q}{trimmed}{q})"),
        _ => format!("url({trimmed})"),
    };

    Normalized {
        restored,
        requires_quote,
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

// Characters an unquoted url token cannot carry unescaped.
fn needs_quoting(c: char) -> bool {
    is_blank(c) || matches!(c, '(' | ')' | '\'' | '"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquoted_passes_through() {
        let n = normalize("some/file.png", QuoteKind::None);
        assert_eq!(n.restored, "url(some/file.png)");
        assert!(!n.requires_quote);
    }

    #[test]
    fn drops_unneeded_quotes() {
        assert_eq!(
            normalize("some/file.png", QuoteKind::Single).restored,
            "url(some/file.png)"
        );
        assert_eq!(
            normalize("some/file.png", QuoteKind::Double).restored,
            "url(some/file.png)"
        );
    }

    #[test]
    fn keeps_original_quote_for_internal_space() {
        let single = normalize("some/file name.png", QuoteKind::Single);
        assert_eq!(single.restored, "url('some/file name.png')");
        assert!(single.requires_quote);

        let double = normalize("some/file name.png", QuoteKind::Double);
        assert_eq!(double.restored, "url(\"some/file name.png\")");
    }

    #[test]
    fn keeps_quote_for_tab() {
        assert_eq!(
            normalize("a\tb.png", QuoteKind::Single).restored,
            "url('a\tb.png')"
        );
    }

    #[test]
    fn keeps_quote_for_parenthesis() {
        let n = normalize("some/).png", QuoteKind::Double);
        assert!(n.requires_quote);
        assert_eq!(n.restored, "url(\"some/).png\")");
    }

    #[test]
    fn removes_line_breaks_anywhere() {
        assert_eq!(
            normalize("so\nme.png", QuoteKind::Single).restored,
            "url(some.png)"
        );
        assert_eq!(
            normalize("\r\nsome/\r\nfile.png", QuoteKind::Double).restored,
            "url(some/file.png)"
        );
    }

    #[test]
    fn trims_outer_whitespace_only() {
        let n = normalize("  some/\nfile.png  ", QuoteKind::Single);
        assert_eq!(n.restored, "url(some/file.png)");
        assert!(!n.requires_quote);
    }

    #[test]
    fn trim_happens_after_line_break_removal() {
        assert_eq!(
            normalize(" \n a.png \n ", QuoteKind::None).restored,
            "url(a.png)"
        );
    }

    #[test]
    fn unquoted_with_space_stays_unquoted() {
        let n = normalize("a b.png", QuoteKind::None);
        assert!(n.requires_quote);
        assert_eq!(n.restored, "url(a b.png)");
    }

    #[test]
    fn empty_content() {
        assert_eq!(normalize("", QuoteKind::Double).restored, "url()");
    }
}
