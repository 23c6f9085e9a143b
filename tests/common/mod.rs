#![allow(dead_code)]

#[path = "../../crates/infrastructure/tests/helpers/dns_server_mock.rs"]
mod dns_server_mock;

pub use dns_server_mock::{MockAnswer, MockDnsServer};
pub use fixtures::*;
