//! synthmetrics gateway library entry.
//!
//! This crate wires the config loader, endpoint table, HTTP transport, and
//! provider response framing around `synthmetrics-core`. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod provider;
pub mod router;
pub mod transport;
