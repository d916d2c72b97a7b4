//! QR & Social Post Tools WASM Module
//!
//! Client-side text utilities for two browser tools:
//! - a QR code generator, which needs payload strings (mailto, tel, WiFi,
//!   vEvent, vCard) and export geometry
//! - a social post formatter, which needs Unicode bold/italic/monospace
//!   glyphs, strikethrough, case transforms, bullets, and a
//!   markdown-stripped preview
//!
//! Everything below `api` is pure Rust with no DOM access. Rendering,
//! clipboard, and file download stay on the JavaScript side.

pub mod error;
pub mod text;
pub mod utils;
pub mod payload;
pub mod styler;
pub mod settings;
pub mod api;

// Re-export commonly used types
pub use error::{EditError, ParseSelectorError};
pub use payload::{encode, PayloadKind, PayloadRequest, TextEncoding, WifiEncryption};
pub use settings::{Dpi, ExportGeometry, QrSettings, QrSize};
pub use styler::{CaretEdit, CaseMode, EditResult, StyleKind};
pub use text::SelectionSpan;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("logger already initialized");
        }
    }

    log::info!("QR & social post tools WASM module initialized");
}
