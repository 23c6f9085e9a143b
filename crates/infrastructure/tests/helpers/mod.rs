
pub use dns_server_mock::{MockAnswer, MockDnsServer};
