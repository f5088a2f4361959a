//! Timing configuration subsystem.
//!
//! # Data Flow
//! ```text
//! timing file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → TimingConfig (validated)
//!     → apply() onto the shared TimeoutRegistry
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new timing file
//!     → validation.rs validates
//!     → consumer applies onto the registry
//!     → bus logic observes new deadlines on its next read
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so an empty file is a valid file
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload keeps the deadlines currently installed

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::TimingConfig;
