use regex::Regex;
use std::sync::LazyLock;

static NON_FILENAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("filename pattern should be valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));
static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("citation pattern should be valid"));

/// Turns a table title into a filesystem-safe filename stem.
///
/// Characters outside word characters, whitespace and hyphens are removed,
/// the edges are trimmed, and internal whitespace runs become underscores.
pub fn sanitize_filename(title: &str) -> String {
    let stripped = NON_FILENAME.replace_all(title, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), "_").to_string()
}

/// Removes bracketed-numeral footnote markers (e.g. `[12]`) from text.
pub fn strip_citations(text: &str) -> String {
    CITATION.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            sanitize_filename("Largest companies (2024)"),
            "Largest_companies_2024"
        );
        assert_eq!(sanitize_filename("  spaced   out  "), "spaced_out");
        assert_eq!(sanitize_filename("pre-tax income"), "pre-tax_income");
        assert_eq!(sanitize_filename("Revenue"), "Revenue");
        assert_eq!(sanitize_filename("!!!"), "");
    }

    #[test]
    fn test_strip_citations() {
        assert_eq!(strip_citations("text[3]"), "text");
        assert_eq!(strip_citations("a[1]b[22]"), "ab");
        assert_eq!(strip_citations("[4]"), "");
        assert_eq!(strip_citations("no markers"), "no markers");
        assert_eq!(strip_citations("x [12]"), "x");
        // Non-numeric brackets are not footnotes
        assert_eq!(strip_citations("a[i]"), "a[i]");
    }
}
