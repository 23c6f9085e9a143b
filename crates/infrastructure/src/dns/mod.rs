pub mod cname_client;
pub mod forwarding;
pub mod transport;

pub use cname_client::UdpCnameResolver;
