//! cnamescan Infrastructure Layer
//!
//! Adapters behind the application ports: the UDP DNS client, system
//! hostname resolution, random resolver selection and the stderr
//! diagnostic stream.
pub mod dns;
pub mod output;
pub mod system;
