//! QR settings and export geometry
//!
//! The renderer asks for pixel sizes and a file name here before it draws
//! and rasterises the code.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::api::types::SizeOption;
use crate::settings::{QrSettings, QrSize};
use crate::wasm_log;

/// Compute preview/export sizes and the download file name
///
/// # Parameters
/// - `settings_js`: `{ size, dpi, encoding, hasLogo }`, missing keys use defaults
#[wasm_bindgen(js_name = exportGeometry)]
pub fn export_geometry(settings_js: JsValue) -> Result<JsValue, JsValue> {
    let settings: QrSettings = deserialize(settings_js, "Invalid QR settings")?;
    let geometry = settings.export_geometry();

    wasm_log!(
        "exportGeometry: {}px @ {}dpi -> {}px canvas",
        geometry.logical_size,
        settings.dpi.value(),
        geometry.canvas_size
    );

    serialize(&geometry, "Serialization error")
}

/// Initial settings panel state
#[wasm_bindgen(js_name = defaultSettings)]
pub fn default_settings() -> Result<JsValue, JsValue> {
    serialize(&QrSettings::default(), "Serialization error")
}

/// Export size presets for the size dropdown
#[wasm_bindgen(js_name = sizePresets)]
pub fn size_presets() -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();

    for size in QrSize::ALL {
        let option = SizeOption {
            value: size.pixels(),
            label: size.label().to_string(),
        };
        array.push(&serialize(&option, "Serialization error")?);
    }

    Ok(array)
}
