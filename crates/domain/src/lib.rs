//! cnamescan Domain Layer
pub mod config;
pub mod diagnostic;
pub mod errors;
pub mod finding;
pub mod resolver_pool;
pub mod scan_job;
pub mod takeover;

pub use config::{CliOverrides, Config, ConfigError, ScanConfig};
pub use diagnostic::Diagnostic;
pub use errors::DomainError;
pub use finding::{Finding, FindingKind};
pub use resolver_pool::ResolverPool;
pub use scan_job::ScanJob;
pub use takeover::ServiceSignature;
