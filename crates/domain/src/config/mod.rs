//! Configuration module for cnamescan
//!
//! - `root`: Main configuration, file loading and CLI overrides
//! - `scan`: Scan pipeline settings and the immutable `ScanConfig`
//! - `logging`: Logging settings
//! - `duration`: Human-friendly duration parsing for the timeout flag
//! - `errors`: Configuration errors

pub mod duration;
pub mod errors;
pub mod logging;
pub mod root;
pub mod scan;

pub use duration::parse_duration;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use scan::{ScanConfig, ScanSettings};
