//! CLI command handlers, one per file.

mod check_host;
mod overrides;
mod sanitize;
mod settings;

pub use check_host::run_check_host;
pub use overrides::{Overrides, PipelineToggles};
pub use sanitize::run_sanitize;
pub use settings::run_settings;
