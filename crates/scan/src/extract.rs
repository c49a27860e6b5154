//! Best-effort page metadata extraction.
//!
//! Only four things in a page are of interest: the `<title>` text, the first
//! `<h1>`, the first `<h2>`, and the `<meta name="description">` content.
//! This module is a tolerant single-pass tag scanner, not a conforming HTML
//! parser. Malformed markup never fails the scan; whatever was collected up
//! to that point is returned and missing fields stay empty.

use crate::config::ScanConfig;

/// Fields pulled out of a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub h1: String,
    pub h2: String,
    pub description: String,
}

impl PageMeta {
    /// First-level heading with the generator's usual fallback: the first
    /// `<h1>`, or the first `<h2>` when no `<h1>` exists.
    pub fn heading(&self) -> &str {
        if self.h1.is_empty() {
            &self.h2
        } else {
            &self.h1
        }
    }
}

/// Extract page metadata from raw markup.
///
/// Tag names and attribute keys are matched case-insensitively. Inner markup
/// inside a captured element is dropped and whitespace is collapsed to single
/// spaces, so `<h1><span>Agua</span> Soberana</h1>` yields `Agua Soberana`.
pub fn extract_page_meta(html: &str) -> PageMeta {
    // ASCII lowercasing preserves byte offsets, so searches run over the
    // lowered copy while slices come from the original.
    let lower = html.to_ascii_lowercase();
    PageMeta {
        title: element_text(html, &lower, "title").unwrap_or_default(),
        h1: element_text(html, &lower, "h1").unwrap_or_default(),
        h2: element_text(html, &lower, "h2").unwrap_or_default(),
        description: meta_description(html, &lower).unwrap_or_default(),
    }
}

/// True when the document is a forwarding-only stub: small, and containing
/// one of the configured redirect markers.
pub fn is_redirect_stub(html: &str, cfg: &ScanConfig) -> bool {
    if html.len() >= cfg.redirect_stub_max_bytes {
        return false;
    }
    let lower = html.to_ascii_lowercase();
    cfg.redirect_markers
        .iter()
        .any(|marker| !marker.is_empty() && lower.contains(&marker.to_ascii_lowercase()))
}

/// Text content of the first `<tag>…</tag>` element, or `None` when no such
/// element opens. An unterminated element is captured through to the end of
/// the document.
fn element_text(html: &str, lower: &str, tag: &str) -> Option<String> {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}");
    let mut from = 0;
    loop {
        let at = lower[from..].find(&open_pat)? + from;
        let after = at + open_pat.len();
        // `<h1` must not match `<html`; the tag name must end at a delimiter.
        match lower.as_bytes().get(after) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {
                let content_start = lower[after..].find('>').map(|p| after + p + 1)?;
                let content_end = lower[content_start..]
                    .find(&close_pat)
                    .map(|p| content_start + p)
                    .unwrap_or(lower.len());
                return Some(collapse_markup(&html[content_start..content_end]));
            }
            _ => from = after,
        }
    }
}

/// Content attribute of the first `<meta name="description">` tag.
fn meta_description(html: &str, lower: &str) -> Option<String> {
    let mut from = 0;
    while let Some(p) = lower[from..].find("<meta") {
        let at = from + p;
        let end = match lower[at..].find('>') {
            Some(q) => at + q,
            None => return None, // truncated tag, give up
        };
        let attrs = &html[at + "<meta".len()..end];
        if let Some(name) = attr_value(attrs, "name") {
            if name.eq_ignore_ascii_case("description") {
                return attr_value(attrs, "content").map(|c| collapse_markup(&c));
            }
        }
        from = end + 1;
    }
    None
}

/// Value of `key` in a raw attribute fragment, handling double-quoted,
/// single-quoted, and bare values. Valueless attributes yield an empty
/// string. Byte-wise scanning is safe here: every delimiter tested for is
/// ASCII and never occurs inside a multi-byte UTF-8 sequence.
fn attr_value(attrs: &str, key: &str) -> Option<String> {
    let bytes = attrs.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        let name_start = i;
        while i < bytes.len()
            && (bytes[i].is_ascii_alphanumeric()
                || bytes[i] == b'-'
                || bytes[i] == b'_'
                || bytes[i] == b':')
        {
            i += 1;
        }
        if i == name_start {
            i += 1;
            continue;
        }
        let name = &attrs[name_start..i];
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = "";
        if i < bytes.len() && bytes[i] == b'=' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] == b'"' || bytes[i] == b'\'') {
                let quote = bytes[i];
                i += 1;
                let value_start = i;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
                value = &attrs[value_start..i];
                if i < bytes.len() {
                    i += 1;
                }
            } else {
                let value_start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                value = &attrs[value_start..i];
            }
        }
        if name.eq_ignore_ascii_case(key) {
            return Some(value.to_string());
        }
    }
    None
}

/// Drop `<…>` spans and collapse runs of whitespace to single spaces.
fn collapse_markup(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <meta name="description" content="Agua Soberana — plataforma de agua potable.">
  <TITLE>Agua Soberana | Ierahkwa</TITLE>
</head>
<body>
  <h1><span class="logo">Agua</span> Soberana</h1>
  <h2>Agua potable para las naciones</h2>
  <h1>second heading is ignored</h1>
</body>
</html>"#;

    #[test]
    fn extracts_all_four_fields() {
        let meta = extract_page_meta(PAGE);
        assert_eq!(meta.title, "Agua Soberana | Ierahkwa");
        assert_eq!(meta.h1, "Agua Soberana");
        assert_eq!(meta.h2, "Agua potable para las naciones");
        assert_eq!(meta.description, "Agua Soberana — plataforma de agua potable.");
        assert_eq!(meta.heading(), "Agua Soberana");
    }

    #[test]
    fn heading_falls_back_to_h2() {
        let meta = extract_page_meta("<title>t</title><h2>Only h2</h2>");
        assert_eq!(meta.heading(), "Only h2");
    }

    #[test]
    fn malformed_markup_yields_partial_meta() {
        let meta = extract_page_meta("<title>Truncated page");
        assert_eq!(meta.title, "Truncated page");
        assert!(meta.h1.is_empty());
        assert!(meta.description.is_empty());
    }

    #[test]
    fn h1_pattern_does_not_match_html_tag() {
        let meta = extract_page_meta("<html><h1>Real</h1></html>");
        assert_eq!(meta.h1, "Real");
    }

    #[test]
    fn single_quoted_and_unordered_meta_attributes() {
        let meta =
            extract_page_meta("<meta content='the summary' name=description><title>x</title>");
        assert_eq!(meta.description, "the summary");
    }

    #[test]
    fn redirect_stub_requires_marker_and_small_size() {
        let cfg = ScanConfig::default();
        let stub = "<html><script>window.location='/agua-soberana/';</script></html>";
        assert!(is_redirect_stub(stub, &cfg));
        // Marker present but file too large.
        let large = format!("{}{}", stub, "x".repeat(600));
        assert!(!is_redirect_stub(&large, &cfg));
        // Small but no marker.
        assert!(!is_redirect_stub("<html>tiny</html>", &cfg));
    }

    #[test]
    fn meta_refresh_marker_detected_case_insensitively() {
        let cfg = ScanConfig::default();
        let stub = r#"<META HTTP-EQUIV="refresh" content="0; url=/sovereign-water/">"#;
        assert!(is_redirect_stub(stub, &cfg));
    }
}
