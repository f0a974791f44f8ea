//! Configuration model
//!
//! The typed configuration a caller supplies when requesting a managed
//! Windows file system. Each concern lives in its own module.

mod audit;
mod config;
mod directory;

// Re-exports
pub use audit::*;
pub use config::*;
pub use directory::*;
