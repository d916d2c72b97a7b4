//! Text buffer core
//!
//! Pure text editing with no knowledge of styling or payloads. The caller
//! owns the buffer and the selection; every operation takes both explicitly
//! and hands back new values.
//!
//! ## Modules
//!
//! - `buffer`: splice/insert primitives and line lookup
//! - `cursor`: selection spans (UTF-16 offsets)

pub mod buffer;
pub mod cursor;

// Re-exports for convenience
pub use buffer::{insert_at, line_start, replace_span, slice_span};
pub use cursor::SelectionSpan;
