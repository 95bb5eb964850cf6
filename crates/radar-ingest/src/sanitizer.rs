//! Row sanitization
//!
//! Turns one [`RawRow`] into a [`SanitizedBlip`]. Sanitization never fails:
//! a missing or malformed cell comes through as an empty string or `false`,
//! since rejecting bad input wholesale is the validator's job.
//!
//! Cell text is untrusted markup. Label fields keep text only; descriptions
//! keep a small set of formatting tags. Values are parsed as HTML fragments
//! and re-serialized by `ammonia`.

use crate::source::RawRow;
use ammonia::Builder;
use once_cell::sync::Lazy;
use radar_model::SanitizedBlip;
use std::collections::{HashMap, HashSet};

const RELAXED_TAGS: [&str; 11] = ["b", "i", "em", "strong", "u", "a", "ul", "ol", "li", "p", "br"];

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

static STRICT: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::new())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::new());
    builder
});

static RELAXED: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(RELAXED_TAGS.into_iter().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .url_schemes(LINK_SCHEMES.into_iter().collect())
        .link_rel(None);
    builder
});

/// How much markup a field may keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// Text only
    Strict,
    /// Basic formatting and links
    Relaxed,
}

impl MarkupPolicy {
    /// Clean `value` under this policy
    ///
    /// The value is parsed as an HTML fragment. Script and style elements
    /// are dropped with their content, comments are dropped, and disallowed
    /// tags are removed while their inner text is kept. Text is re-emitted
    /// escaped, so no markup survives outside the allowed tags. The result
    /// is trimmed.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        let builder = match self {
            Self::Strict => &*STRICT,
            Self::Relaxed => &*RELAXED,
        };
        builder.clean(value).to_string().trim().to_string()
    }
}

/// Normalizes raw spreadsheet rows
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSanitizer;

impl RowSanitizer {
    /// Create sanitizer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalize one row
    ///
    /// Columns are looked up case-insensitively. `is_new` is true only for
    /// `true` in any casing.
    #[must_use]
    pub fn sanitize(&self, row: &RawRow) -> SanitizedBlip {
        let strict = |column: &str| MarkupPolicy::Strict.apply(row.field(column).unwrap_or_default());

        SanitizedBlip {
            name: strict("name"),
            quadrant: strict("quadrant"),
            ring: strict("ring"),
            is_new: strict("isNew").eq_ignore_ascii_case("true"),
            topic: strict("topic"),
            description: MarkupPolicy::Relaxed.apply(row.field("description").unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells.iter().copied().collect()
    }

    fn is_new(value: &str) -> bool {
        RowSanitizer::new().sanitize(&row(&[("isNew", value)])).is_new
    }

    #[test]
    fn is_new_true_in_any_case() {
        assert!(is_new("true"));
        assert!(is_new("True"));
        assert!(is_new("TRUE"));
        assert!(is_new(" true "));
    }

    #[test]
    fn is_new_false_otherwise() {
        assert!(!is_new("false"));
        assert!(!is_new(""));
        assert!(!is_new("yes"));
        assert!(!RowSanitizer::new().sanitize(&RawRow::new()).is_new);
    }

    #[test]
    fn trims_and_strips_labels() {
        let blip = RowSanitizer::new().sanitize(&row(&[
            ("name", "  <b>Kubernetes</b> "),
            ("ring", "Adopt<script>alert(1)</script>"),
            ("quadrant", " platforms "),
            ("topic", "<i>infra</i>"),
        ]));

        assert_eq!(blip.name, "Kubernetes");
        assert_eq!(blip.ring, "Adopt");
        assert_eq!(blip.quadrant, "platforms");
        assert_eq!(blip.topic, "infra");
    }

    #[test]
    fn missing_cells_are_empty() {
        let blip = RowSanitizer::new().sanitize(&row(&[("name", "Rust")]));
        assert_eq!(blip.ring, "");
        assert_eq!(blip.description, "");
        assert_eq!(blip.topic, "");
    }

    #[test]
    fn header_case_is_ignored() {
        let blip = RowSanitizer::new().sanitize(&row(&[("Name", "Rust"), ("ISNEW", "true")]));
        assert_eq!(blip.name, "Rust");
        assert!(blip.is_new);
    }

    #[test]
    fn relaxed_keeps_formatting_tags() {
        let cleaned = MarkupPolicy::Relaxed
            .apply(r#"<p class="x">Use <strong>it</strong><br/> <span>now</span></p>"#);
        assert_eq!(cleaned, "<p>Use <strong>it</strong><br> now</p>");
    }

    #[test]
    fn relaxed_keeps_safe_links_only() {
        assert_eq!(
            MarkupPolicy::Relaxed.apply(r#"<a href="https://rust-lang.org" onclick="x()">Rust</a>"#),
            r#"<a href="https://rust-lang.org">Rust</a>"#
        );
        assert_eq!(
            MarkupPolicy::Relaxed.apply(r#"<a href='/faq#radar'>FAQ</a>"#),
            r#"<a href="/faq#radar">FAQ</a>"#
        );
        assert_eq!(
            MarkupPolicy::Relaxed.apply(r#"<a href="javascript:alert(1)">x</a>"#),
            "<a>x</a>"
        );
    }

    #[test]
    fn relaxed_drops_scripts_and_comments() {
        assert_eq!(
            MarkupPolicy::Relaxed.apply("a<!-- hidden --><style>p{}</style><SCRIPT>x</SCRIPT>b"),
            "ab"
        );
    }

    #[test]
    fn strict_escapes_text() {
        assert_eq!(MarkupPolicy::Strict.apply("Kubernetes"), "Kubernetes");
        assert_eq!(MarkupPolicy::Strict.apply("C++ & Rust"), "C++ &amp; Rust");
        assert_eq!(MarkupPolicy::Strict.apply("a < b"), "a &lt; b");
    }

    #[test]
    fn strict_nested_tags_stay_text() {
        let cleaned = MarkupPolicy::Strict.apply("<<b>script>alert(1)<</b>/script>");
        assert!(!cleaned.contains('<'), "{cleaned}");
        assert!(cleaned.contains("&lt;script"), "{cleaned}");
    }

    #[test]
    fn nested_tags_in_label_stay_text() {
        let blip = RowSanitizer::new().sanitize(&row(&[("name", "<<i>img src=x onerror=alert(1)>")]));
        assert!(!blip.name.contains('<'), "{}", blip.name);
    }

    #[test]
    fn relaxed_nested_tags_stay_text() {
        let cleaned = MarkupPolicy::Relaxed.apply("<<span>script>alert(1)<</span>/script>");
        assert!(!cleaned.contains("<script"), "{cleaned}");
        assert!(!cleaned.contains("</script"), "{cleaned}");
    }

    #[test]
    fn unclosed_script_is_dropped() {
        let cleaned = MarkupPolicy::Strict.apply("before<script");
        assert!(!cleaned.contains('<'), "{cleaned}");
        assert!(cleaned.starts_with("before"));
    }

    #[test]
    fn attribute_containing_angle_bracket() {
        assert_eq!(
            MarkupPolicy::Relaxed.apply(r#"<a href="https://x.org" title="a>b">link</a>"#),
            r#"<a href="https://x.org">link</a>"#
        );
    }

    #[test]
    fn relaxed_drops_event_handler_elements() {
        assert_eq!(MarkupPolicy::Relaxed.apply("<img src=x onerror=alert(1)>"), "");
        assert_eq!(
            MarkupPolicy::Relaxed.apply(r#"<b onmouseover="x()">bold</b>"#),
            "<b>bold</b>"
        );
    }
}
