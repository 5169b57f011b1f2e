pub mod config;
pub mod logging;

pub mod cleanup;
pub mod host_policy;
pub mod link_policy;
pub mod paste_filter;
pub mod pipeline;
pub mod table;

pub use host_policy::HostAllowList;
pub use pipeline::{sanitize, PasteEvent, PasteSanitizer};
