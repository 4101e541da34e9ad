//! Application-level utilities for the Datavault CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and vault files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
