use url::{ParseError, Url};

/// Resolve the host an anchor's `href` points at.
///
/// Absolute URLs yield their own host; relative ones are joined onto `base`
/// when one is configured. Anything without a host (no href, `mailto:`,
/// relative without a base, unparseable) yields `None`. The port is not part
/// of the result, so `example.com:8443` resolves to `example.com`.
pub fn resolve_anchor_host(href: Option<&str>, base: Option<&Url>) -> Option<String> {
    let href = href?;
    let parsed = match Url::parse(href) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => base?.join(href).ok()?,
        Err(err) => {
            tracing::debug!(href, error = %err, "anchor href does not parse");
            return None;
        }
    };
    parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .map(|h| h.to_ascii_lowercase())
}
