pub mod host_resolver;
pub mod server_selector;

pub use host_resolver::SystemHostResolver;
pub use server_selector::FastrandSelector;
