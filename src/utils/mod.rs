//! Utility modules
//!
//! Helpers shared by the payload encoder and the post formatter.

pub mod utf16;

// Re-export commonly used functions
pub use utf16::{byte_index, utf16_len};
