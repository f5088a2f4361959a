//! Protocol timing subsystem.
//!
//! # Data Flow
//! ```text
//! TimeoutRegistry (six deadlines, µs)
//!     → read by the cyclic engine / mailbox / state logic before each wait
//!     → overwritten at setup, or at runtime via config::schema::TimingConfig::apply
//! ```
//!
//! # Design Decisions
//! - Deadlines are plain shared data; the registry supplies them, it never enforces them
//! - Atomic scalar fields with relaxed ordering; readers never block
//! - The triple-retry allowance is derived on every read, never stored

pub mod registry;

pub use registry::TimeoutKind;
pub use registry::TimeoutRegistry;
