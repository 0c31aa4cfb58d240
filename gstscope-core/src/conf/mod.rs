//! Service configuration, read from `gstscope.hcl` in a config directory.

mod error;
mod loader;
mod types;
mod validation;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE, apply_port_override, load_config, parse_config};
pub use types::{GstscopeConfig, IngestConfig, LogFormat, LoggingConfig, QueryConfig, ServerConfig};
pub use validation::{ValidationIssue, ValidationReport, validate};
