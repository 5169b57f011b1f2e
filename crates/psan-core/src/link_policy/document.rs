//! HTML5 parse of a pasted fragment and serialization of its body.
//!
//! The fragment is parsed as a whole document, the way a browser would, so
//! stray end tags are balanced and any `<html>`/`<head>` wrapper from the
//! clipboard is dropped when only the body's children are written back.

use kuchikiki::traits::TendrilSink;
use kuchikiki::NodeRef;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("parsed document has no body element")]
    MissingBody,
    #[error("serialize body: {0}")]
    Serialize(#[from] std::io::Error),
    #[error("serialized body is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn parse_document(html: &str) -> NodeRef {
    kuchikiki::parse_html().one(html)
}

/// Markup of everything inside `<body>`, without the body tag itself.
pub fn body_inner_html(document: &NodeRef) -> Result<String, DocumentError> {
    let body = document
        .select_first("body")
        .map_err(|()| DocumentError::MissingBody)?;
    let mut out = Vec::new();
    for child in body.as_node().children() {
        child.serialize(&mut out)?;
    }
    Ok(String::from_utf8(out)?)
}
