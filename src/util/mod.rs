//! Utility functions for common operations.
//!
//! Currently just Unicode-aware text measurement for grid rendering.

mod text;

pub use text::{display_width, pad_to_width, truncate_to_width};
