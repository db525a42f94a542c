//! Checks on rendered HTML, shared by the integration and property tests.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Entities the renderer writes into text.
const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

/// Removes every tag the renderer can emit, leaving only text content.
fn strip_renderer_tags(html: &str) -> Cow<'_, str> {
    static RENDERER_TAG: OnceLock<Regex> = OnceLock::new();
    let tag = RENDERER_TAG.get_or_init(|| {
        Regex::new(
            r"</?(?:p|h[1-6]|ul|ol|li|blockquote|hr|br|table|thead|tbody|tr|th|td|pre|code|strong|em|a)(?:\s[^<>]*)?>",
        )
        .expect("Invalid renderer tag regex")
    });
    tag.replace_all(html, "")
}

/// Lists every place where literal text escaped escaping.
///
/// After stripping the renderer's own tags, no `<` or `>` may remain and every
/// `&` must start one of [`ENTITIES`]. An empty result means the output holds.
pub fn violations(html: &str) -> Vec<String> {
    let residual = strip_renderer_tags(html);
    let mut found = vec![];
    for (i, c) in residual.char_indices() {
        match c {
            '<' | '>' => found.push(format!("raw {c:?} at byte {i} of text content")),
            '&' if !ENTITIES.iter().any(|e| residual[i..].starts_with(e)) => {
                found.push(format!("bare '&' at byte {i} of text content"));
            }
            _ => {}
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_tags_with_attributes() {
        let html = r#"<table class="md-table"><tr><td style="text-align:left">x</td></tr></table>"#;
        assert_eq!(strip_renderer_tags(html), "x");
    }

    #[test]
    fn unknown_tags_are_kept() {
        assert_eq!(strip_renderer_tags("<script>x</script>"), "<script>x</script>");
    }

    #[test]
    fn clean_output_has_no_violations() {
        assert!(violations("<p>a &lt;b&gt; &amp;amp;</p>").is_empty());
    }

    #[test]
    fn raw_markup_is_reported() {
        assert_eq!(violations("<p><script></p>").len(), 2);
    }

    #[test]
    fn bare_ampersand_is_reported() {
        assert_eq!(violations("<p>a & b</p>").len(), 1);
    }
}
