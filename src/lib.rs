//! Protocol timing defaults for an EtherCAT master stack.

pub mod config;
pub mod timeouts;

pub use config::schema::TimingConfig;
pub use timeouts::{TimeoutKind, TimeoutRegistry};
