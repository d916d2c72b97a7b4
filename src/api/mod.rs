//! JavaScript-facing API
//!
//! Thin `#[wasm_bindgen]` wrappers over the pure Rust core. They decode JS
//! values, call into `payload` / `styler` / `settings`, and hand results
//! back as plain objects.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization, error conversion
//! - `types`: records shared across the JS boundary
//! - `payload`: QR payload encoding
//! - `formatter`: post formatter toolbar actions
//! - `export`: settings and export geometry

pub mod helpers;
pub mod types;
pub mod export;
pub mod formatter;
pub mod payload;

pub use export::{default_settings, export_geometry, size_presets};
pub use formatter::{append_emoji, apply_case_transform, apply_unicode_style, format_preview, insert_at_caret, insert_bullet};
pub use payload::{blank_payload, default_payload, encode_payload, is_payload_ready, payload_kinds, wifi_encryptions};
