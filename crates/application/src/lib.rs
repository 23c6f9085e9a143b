//! cnamescan Application Layer
//!
//! Ports the scan pipeline depends on, and the per-domain use cases that
//! drive a lookup through verification and classification.
pub mod ports;
pub mod services;
pub mod use_cases;
