//! Trusted-host policy for pasted links.
//!
//! Configured site hosts become [`HostPattern`]s (suffix matched at a label
//! boundary) collected into a [`HostAllowList`]. Anchor hrefs are reduced to
//! a bare host with [`resolve_anchor_host`] before matching, so the policy
//! never depends on path, query or port.

mod allow_list;
mod pattern;
mod resolve;

pub use allow_list::HostAllowList;
pub use pattern::{HostPattern, HostPatternError};
pub use resolve::resolve_anchor_host;
