//! Adds the `table` class to pasted tables so site styles apply.

use lol_html::{element, rewrite_str, RewriteStrSettings};

const TABLE_CLASS: &str = "table";

/// The class attribute value a table should carry, or `None` if it already
/// has the table class.
fn tagged_class(existing: Option<&str>) -> Option<String> {
    match existing.map(str::trim) {
        None | Some("") => Some(TABLE_CLASS.to_string()),
        Some(classes) if classes.split_ascii_whitespace().any(|c| c == TABLE_CLASS) => None,
        Some(classes) => Some(format!("{classes} {TABLE_CLASS}")),
    }
}

/// Ensure every `<table>` has the `table` class. On rewriter failure the
/// input is returned as-is.
pub fn tag_tables(html: &str) -> String {
    let result = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!("table", |el| {
                if let Some(class) = tagged_class(el.get_attribute("class").as_deref()) {
                    el.set_attribute("class", &class)?;
                }
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    );
    result.unwrap_or_else(|err| {
        tracing::warn!("table tagging failed, passing fragment through: {err}");
        html.to_string()
    })
}
