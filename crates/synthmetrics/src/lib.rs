//! Top-level facade crate for synthmetrics.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use synthmetrics_core::*;
}

pub mod gateway {
    pub use synthmetrics_gateway::*;
}
