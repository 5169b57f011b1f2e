//! Outbound link policy.
//!
//! Anchors pointing at a trusted host keep same-context navigation (any
//! `target` is dropped, `rel` is left alone). Every other anchor, including
//! ones with no resolvable host, opens in a new context with
//! `rel="noopener"`.
//!
//! The fragment is parsed into a document, anchors are rewritten on the
//! tree, and the body's markup is serialized back. If the body cannot be
//! serialized the fragment is returned unmodified.

mod document;

use kuchikiki::NodeRef;
use url::Url;

use crate::host_policy::{resolve_anchor_host, HostAllowList};

pub use document::{body_inner_html, parse_document, DocumentError};

/// Target set on untrusted anchors.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// Rel set on untrusted anchors.
pub const UNTRUSTED_REL: &str = "noopener";

/// Outcome of checking one anchor against the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorDecision {
    Trusted,
    Untrusted,
}

/// Classify an anchor by its (already entity-decoded) `href`.
pub fn classify_href(
    href: Option<&str>,
    allow_list: &HostAllowList,
    base: Option<&Url>,
) -> AnchorDecision {
    match resolve_anchor_host(href, base) {
        Some(host) if allow_list.is_trusted(&host) => AnchorDecision::Trusted,
        _ => AnchorDecision::Untrusted,
    }
}

#[derive(Debug, Default)]
struct RewriteStats {
    trusted: usize,
    untrusted: usize,
}

fn apply_to_anchors(
    document: &NodeRef,
    allow_list: &HostAllowList,
    base: Option<&Url>,
) -> RewriteStats {
    let mut stats = RewriteStats::default();
    let anchors = match document.select("a") {
        Ok(anchors) => anchors,
        Err(()) => return stats,
    };
    for anchor in anchors {
        let mut attrs = anchor.attributes.borrow_mut();
        let decision = classify_href(attrs.get("href"), allow_list, base);
        match decision {
            AnchorDecision::Trusted => {
                attrs.remove("target");
                stats.trusted += 1;
            }
            AnchorDecision::Untrusted => {
                attrs.insert("target", NEW_CONTEXT_TARGET.to_string());
                attrs.insert("rel", UNTRUSTED_REL.to_string());
                stats.untrusted += 1;
            }
        }
    }
    stats
}

/// Apply the link policy to every `<a>` in `html` and return the body markup.
pub fn rewrite_anchor_targets(
    html: &str,
    allow_list: &HostAllowList,
    base: Option<&Url>,
) -> String {
    let document = parse_document(html);
    let stats = apply_to_anchors(&document, allow_list, base);

    match body_inner_html(&document) {
        Ok(out) => {
            if stats.trusted + stats.untrusted > 0 {
                tracing::debug!(
                    trusted = stats.trusted,
                    untrusted = stats.untrusted,
                    "applied link policy"
                );
            }
            out
        }
        Err(err) => {
            tracing::warn!("link policy rewrite failed, passing fragment through: {err}");
            html.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(hosts: &[&str]) -> HostAllowList {
        HostAllowList::parse(hosts.iter().copied()).unwrap()
    }

    /// `(target, rel)` of every anchor in `html`, in document order.
    fn anchor_attrs(html: &str) -> Vec<(Option<String>, Option<String>)> {
        parse_document(html)
            .select("a")
            .unwrap()
            .map(|a| {
                let attrs = a.attributes.borrow();
                (
                    attrs.get("target").map(str::to_owned),
                    attrs.get("rel").map(str::to_owned),
                )
            })
            .collect()
    }

    fn opens_new_context() -> (Option<String>, Option<String>) {
        (Some("_blank".to_string()), Some("noopener".to_string()))
    }

    #[test]
    fn trusted_subdomain_loses_target() {
        let out = rewrite_anchor_targets(
            r#"<a href="https://docs.example.com/x" target="_blank">d</a>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(out, r#"<a href="https://docs.example.com/x">d</a>"#);
    }

    #[test]
    fn trusted_anchor_keeps_rel() {
        let out = rewrite_anchor_targets(
            r#"<a href="https://example.com/" rel="nofollow" target="x">d</a>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(out, r#"<a href="https://example.com/" rel="nofollow">d</a>"#);
    }

    #[test]
    fn untrusted_anchor_opens_new_context() {
        let out = rewrite_anchor_targets(
            r#"<a href="http://evil.com/x">go</a>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(anchor_attrs(&out), vec![opens_new_context()]);
        assert!(out.starts_with(r#"<a href="http://evil.com/x" "#));
        assert!(out.ends_with(">go</a>"));
    }

    #[test]
    fn untrusted_anchor_overwrites_existing_values() {
        let out = rewrite_anchor_targets(
            r#"<a rel="external" href="http://evil.com/" target="_self">go</a>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(anchor_attrs(&out), vec![opens_new_context()]);
    }

    #[test]
    fn lookalike_suffix_is_untrusted() {
        let out = rewrite_anchor_targets(
            r#"<a href="https://notexample.com/">n</a>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(anchor_attrs(&out), vec![opens_new_context()]);
    }

    #[test]
    fn anchors_without_host_are_untrusted() {
        let allow = list(&["example.com"]);
        for html in [
            r#"<a name="top">t</a>"#,
            r#"<a href="/local">l</a>"#,
            r#"<a href="mailto:x@example.com">m</a>"#,
        ] {
            let out = rewrite_anchor_targets(html, &allow, None);
            assert_eq!(anchor_attrs(&out), vec![opens_new_context()], "{html}");
        }
    }

    #[test]
    fn relative_anchor_trusted_with_base() {
        let base = Url::parse("https://www.example.com/blog/").unwrap();
        let out = rewrite_anchor_targets(
            r#"<a href="/about" target="_blank">a</a>"#,
            &list(&["example.com"]),
            Some(&base),
        );
        assert_eq!(out, r#"<a href="/about">a</a>"#);
    }

    #[test]
    fn encoded_scheme_does_not_hide_host() {
        let base = Url::parse("https://example.com/").unwrap();
        let out = rewrite_anchor_targets(
            r#"<a href="http&#58;//evil.com/">e</a>"#,
            &list(&["example.com"]),
            Some(&base),
        );
        assert_eq!(anchor_attrs(&out), vec![opens_new_context()]);
    }

    #[test]
    fn markup_without_anchors_is_unchanged() {
        let html = "<p>Hi <b>there</b><br>&amp; bye</p>";
        assert_eq!(rewrite_anchor_targets(html, &list(&["example.com"]), None), html);
    }

    #[test]
    fn every_anchor_is_visited() {
        let out = rewrite_anchor_targets(
            r#"<p><a href="https://example.com/" target="_top">a</a> <a href="https://evil.com/">b</a></p>"#,
            &list(&["example.com"]),
            None,
        );
        assert_eq!(anchor_attrs(&out), vec![(None, None), opens_new_context()]);
    }

    #[test]
    fn full_document_paste_yields_body_only() {
        let html = concat!(
            "<html><head><style>p{color:red}</style></head><body>",
            "<!--StartFragment--><p>x</p>",
            r#"<p><a href="https://evil.com/">e</a></p>"#,
            "<!--EndFragment--></body></html>",
        );
        let out = rewrite_anchor_targets(html, &list(&["example.com"]), None);
        assert!(out.starts_with("<!--StartFragment--><p>x</p><p><a "), "{out}");
        assert!(out.ends_with("</a></p><!--EndFragment-->"), "{out}");
        assert!(!out.contains("<head>") && !out.contains("<style>") && !out.contains("<body>"));
        assert_eq!(anchor_attrs(&out), vec![opens_new_context()]);
    }

    #[test]
    fn unbalanced_markup_is_balanced_on_output() {
        let out = rewrite_anchor_targets("<p>A</p></p><p><p>B", &list(&[]), None);
        assert_eq!(out, "<p>A</p><p></p><p></p><p>B</p>");
    }
}
