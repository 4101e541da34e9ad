//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records
//! as tables, plain text, or JSON.

mod json;
mod text;

// Re-export public API
pub use json::{decrypted_json, outcomes_json, records_json};
pub use text::{print_decrypted, print_outcomes, print_record_list};
