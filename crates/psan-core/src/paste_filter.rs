//! Markup rules applied to pasted content.
//!
//! - inline `style` is removed everywhere
//! - `code` and `span` are unwrapped, keeping their content
//! - block and table elements lose every attribute except `class`

use lol_html::{element, rewrite_str, RewriteStrSettings};

/// Elements that are replaced by their content.
const UNWRAPPED_TAGS: &[&str] = &["code", "span"];

/// Elements stripped of every attribute but `class`.
const BARE_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead", "tbody", "tr", "th", "td",
];

/// Attributes that survive on [`BARE_TAGS`].
const KEPT_ATTRIBUTES: &[&str] = &["class"];

/// Apply the paste filter. On rewriter failure the input is returned as-is.
pub fn apply_paste_filter(html: &str) -> String {
    let mut handlers = vec![element!("*", |el| {
        el.remove_attribute("style");
        Ok(())
    })];

    for &tag in UNWRAPPED_TAGS {
        handlers.push(element!(tag, |el| {
            el.remove_and_keep_content();
            Ok(())
        }));
    }

    for &tag in BARE_TAGS {
        handlers.push(element!(tag, |el| {
            let doomed: Vec<String> = el
                .attributes()
                .iter()
                .map(|a| a.name())
                .filter(|name| !KEPT_ATTRIBUTES.contains(&name.as_str()))
                .collect();
            for name in doomed {
                el.remove_attribute(&name);
            }
            Ok(())
        }));
    }

    match rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::new()
        },
    ) {
        Ok(out) => out,
        Err(err) => {
            tracing::warn!("paste filter failed, passing fragment through: {err}");
            html.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_inline_styles() {
        assert_eq!(
            apply_paste_filter(r#"<b style="color:red">x</b>"#),
            "<b>x</b>"
        );
    }

    #[test]
    fn unwraps_code_and_span() {
        assert_eq!(
            apply_paste_filter(r#"<p>a <span class="x">b</span> <code>c</code></p>"#),
            "<p>a b c</p>"
        );
    }

    #[test]
    fn block_attributes_stripped_except_class() {
        assert_eq!(
            apply_paste_filter(r#"<p id="p1" class="lead" data-x="1">t</p>"#),
            r#"<p class="lead">t</p>"#
        );
        assert_eq!(
            apply_paste_filter(r#"<table border="1"><tr><td colspan="2">c</td></tr></table>"#),
            "<table><tr><td>c</td></tr></table>"
        );
        assert_eq!(apply_paste_filter(r#"<h2 id="top">H</h2>"#), "<h2>H</h2>");
    }

    #[test]
    fn other_elements_keep_attributes() {
        let html = r#"<a href="https://example.com/" title="t">l</a><img src="i.png" alt="a">"#;
        assert_eq!(apply_paste_filter(html), html);
    }
}
