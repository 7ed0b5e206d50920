//! Line scanning: section extraction, line normalization and key/value
//! splitting.
//!
//! Everything here borrows from the raw config text; nothing allocates.

use super::types::{DomainSchema, SectionBoundary};
use std::str::Lines;

/// Trim leading and trailing ASCII spaces and tabs.
///
/// An empty result marks a line to skip.
pub fn normalize_line(line: &str) -> &str {
    line.trim_matches(|c| c == ' ' || c == '\t')
}

/// Whether a normalized line is a `[...]` section header.
pub fn is_header(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('[') && line.ends_with(']')
}

/// Split a normalized line at the first `=`.
///
/// Returns `None` when there is no `=`, or when the key or the value is
/// empty after trimming.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = normalize_line(key);
    let value = normalize_line(value);
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// How a section's start is recognized and when it ends.
#[derive(Debug, Clone, Copy)]
enum Scope<'a> {
    /// Opens at a trimmed line equal to any of the headers, closes at
    /// any other header.
    Strict(&'a [&'a str]),
    /// Opens at a raw line starting with the prefix and never closes.
    Legacy(&'a str),
}

/// Lazy iterator over the normalized, non-blank lines of one section.
///
/// Header lines that open the section are consumed, never yielded. The
/// iterator is a pure function of its inputs, so building a new one
/// restarts the scan.
#[derive(Debug, Clone)]
pub struct SectionLines<'a> {
    lines: Lines<'a>,
    scope: Scope<'a>,
    inside: bool,
}

impl<'a> SectionLines<'a> {
    /// Lines under any of `headers`, up to the next other header.
    pub fn strict(text: &'a str, headers: &'a [&'a str]) -> Self {
        Self::with_scope(text, Scope::Strict(headers))
    }

    /// Every line after the first raw line beginning with `prefix`.
    ///
    /// The prefix is compared before trimming, so an indented header does
    /// not open the section.
    pub fn legacy(text: &'a str, prefix: &'a str) -> Self {
        Self::with_scope(text, Scope::Legacy(prefix))
    }

    /// The scan a schema asks for under the given boundary policy.
    pub fn for_schema(text: &'a str, schema: &'a DomainSchema, boundary: SectionBoundary) -> Self {
        match boundary {
            SectionBoundary::Strict => Self::strict(text, schema.headers),
            SectionBoundary::Legacy => Self::legacy(text, schema.legacy_prefix),
        }
    }

    fn with_scope(text: &'a str, scope: Scope<'a>) -> Self {
        Self {
            lines: text.lines(),
            scope,
            inside: false,
        }
    }
}

impl<'a> Iterator for SectionLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for raw in self.lines.by_ref() {
            if let Scope::Legacy(prefix) = self.scope
                && !self.inside
            {
                self.inside = raw.starts_with(prefix);
                continue;
            }

            let line = normalize_line(raw);
            if line.is_empty() {
                continue;
            }

            if let Scope::Strict(headers) = self.scope
                && is_header(line)
            {
                self.inside = headers.contains(&line);
                continue;
            }

            if self.inside {
                return Some(line);
            }
        }
        None
    }
}

/// Key/value pairs of one domain's section, in file order.
pub fn section_pairs<'a>(
    text: &'a str,
    schema: &'a DomainSchema,
    boundary: SectionBoundary,
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    SectionLines::for_schema(text, schema, boundary).filter_map(split_key_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Domain;

    #[test]
    fn normalize_strips_spaces_and_tabs() {
        assert_eq!(normalize_line("  \tkey = value\t "), "key = value");
        assert_eq!(normalize_line("\t \t"), "");
        assert_eq!(normalize_line("plain"), "plain");
    }

    #[test]
    fn normalize_is_idempotent() {
        for line in ["  a = b  ", "\t[BSA]", "", "x", " = ", "\tbsa_tests = 1,2\t"] {
            let once = normalize_line(line);
            assert_eq!(normalize_line(once), once);
        }
    }

    #[test]
    fn normalize_keeps_other_whitespace() {
        // Only spaces and tabs are trimmed.
        assert_eq!(normalize_line("value\u{b}"), "value\u{b}");
    }

    #[test]
    fn header_detection() {
        assert!(is_header("[BSA]"));
        assert!(is_header("[]"));
        assert!(!is_header("["));
        assert!(!is_header("]"));
        assert!(!is_header("[BSA"));
        assert!(!is_header("key = [x]y"));
    }

    #[test]
    fn split_at_first_equals() {
        assert_eq!(split_key_value("a = b = c"), Some(("a", "b = c")));
        assert_eq!(split_key_value("bsa_tests=1,2,3"), Some(("bsa_tests", "1,2,3")));
        assert_eq!(
            split_key_value("bsa_modules \t=\t pcie "),
            Some(("bsa_modules", "pcie"))
        );
    }

    #[test]
    fn split_without_equals_yields_nothing() {
        assert_eq!(split_key_value("no equals sign here"), None);
        assert_eq!(split_key_value("[BSA]"), None);
    }

    #[test]
    fn split_drops_empty_value_or_key() {
        assert_eq!(split_key_value("bsa_skip ="), None);
        assert_eq!(split_key_value("bsa_skip =   \t"), None);
        assert_eq!(split_key_value("= value"), None);
    }

    #[test]
    fn section_lines_are_restricted_to_the_section() {
        let text = "a = 1\n[BSA]\nb = 2\n\n   \nc = 3\n[SBSA]\nd = 4\n";
        let lines: Vec<_> = SectionLines::strict(text, &["[BSA]"]).collect();
        assert_eq!(lines, vec!["b = 2", "c = 3"]);
    }

    #[test]
    fn legacy_boundary_never_closes() {
        let text = "a = 1\n[BSA]\nb = 2\n[SBSA]\nd = 4\n";
        let lines: Vec<_> = SectionLines::legacy(text, "[BSA]").collect();
        assert_eq!(lines, vec!["b = 2", "[SBSA]", "d = 4"]);
    }

    #[test]
    fn repeated_header_reopens_section() {
        let text = "[BSA]\nb = 2\n[SCT]\ns = 1\n[BSA]\nc = 3\n";
        let lines: Vec<_> = SectionLines::strict(text, &["[BSA]"]).collect();
        assert_eq!(lines, vec!["b = 2", "c = 3"]);
    }

    #[test]
    fn indented_header_is_recognized() {
        let text = "  [BSA]  \nb = 2\n";
        let lines: Vec<_> = SectionLines::strict(text, &["[BSA]"]).collect();
        assert_eq!(lines, vec!["b = 2"]);
    }

    #[test]
    fn header_with_shared_prefix_does_not_match() {
        let text = "[BSA_EXTRA]\nb = 2\n[SBSA]\nc = 3\n";
        let lines: Vec<_> = SectionLines::strict(text, &["[BSA]"]).collect();
        assert!(lines.is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let text = "[SCT]\r\nsct_ui_mode = true\r\n";
        let pairs: Vec<_> = section_pairs(text, Domain::Sct.schema(), SectionBoundary::Strict).collect();
        assert_eq!(pairs, vec![("sct_ui_mode", "true")]);
    }

    #[test]
    fn missing_trailing_newline_is_normal_termination() {
        let text = "[BSA]\nbsa_modules = pcie";
        let pairs: Vec<_> = section_pairs(text, Domain::Bsa.schema(), SectionBoundary::Strict).collect();
        assert_eq!(pairs, vec![("bsa_modules", "pcie")]);
    }

    #[test]
    fn section_scan_is_restartable() {
        let text = "[BSA]\na = 1\n";
        let first: Vec<_> = section_pairs(text, Domain::Bsa.schema(), SectionBoundary::Strict).collect();
        let second: Vec<_> = section_pairs(text, Domain::Bsa.schema(), SectionBoundary::Strict).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn strict_accepts_any_listed_header() {
        let text = "[AUTOMATION]\na = 1\n[BSA]\nb = 2\n[SCRT]\nc = 3\n";
        let lines: Vec<_> = SectionLines::strict(text, &["[AUTOMATION]", "[SCRT]"]).collect();
        assert_eq!(lines, vec!["a = 1", "c = 3"]);
    }

    #[test]
    fn legacy_matches_raw_line_prefix() {
        let text = "[AUTOMATION_EXTRA]\na = 1\n";
        let lines: Vec<_> = SectionLines::legacy(text, "[AUTO").collect();
        assert_eq!(lines, vec!["a = 1"]);

        let text = "[BBSR_SCT]\nb = 2\n";
        let lines: Vec<_> = SectionLines::legacy(text, "[BBSR").collect();
        assert_eq!(lines, vec!["b = 2"]);
    }

    #[test]
    fn legacy_ignores_indented_header() {
        let text = "  [BSA]\nb = 2\n";
        let lines: Vec<_> = SectionLines::legacy(text, "[BSA]").collect();
        assert!(lines.is_empty());
    }

    #[test]
    fn for_schema_picks_scan_by_boundary() {
        let text = "[BSA_EXTRA]\nb = 2\n";
        let schema = Domain::Bsa.schema();
        assert_eq!(
            SectionLines::for_schema(text, schema, SectionBoundary::Strict).count(),
            0
        );
        // The firmware compares only the first five characters.
        assert_eq!(
            SectionLines::for_schema(text, schema, SectionBoundary::Legacy).collect::<Vec<_>>(),
            vec!["b = 2"]
        );
    }
}
