pub mod cname_resolver;
pub mod diagnostic_sink;
pub mod host_resolver;
pub mod server_selector;

pub use cname_resolver::CnameResolver;
pub use diagnostic_sink::DiagnosticSink;
pub use host_resolver::HostResolver;
pub use server_selector::ServerSelector;
