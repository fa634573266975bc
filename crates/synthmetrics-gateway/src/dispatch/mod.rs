//! Path -> endpoint lookup.
//!
//! Re-exports the endpoint table so handlers can depend on this module
//! directly.

pub mod table;

pub use table::EndpointTable;
