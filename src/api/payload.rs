//! QR payload operations
//!
//! JS-facing wrappers over [`crate::payload`].

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_selector, serialize};
use crate::api::types::KindOption;
use crate::payload::{self, PayloadKind, PayloadRequest, TextEncoding, WifiEncryption};
use crate::wasm_log;

/// Encode a payload request
///
/// # Parameters
/// - `request_js`: object tagged by `kind` ("text", "email", "phone", "wifi", "event", "vcard")
/// - `encoding`: "UTF-8", "ANSI" or "Cyrillic"
///
/// # Returns
/// The string to embed in the QR code
#[wasm_bindgen(js_name = encodePayload)]
pub fn encode_payload(request_js: JsValue, encoding: &str) -> Result<String, JsValue> {
    let request: PayloadRequest = deserialize(request_js, "Invalid payload request")?;
    let encoding: TextEncoding = parse_selector(encoding, "Invalid encoding")?;

    wasm_log!("encodePayload called: kind={}, encoding={}", request.kind().as_str(), encoding);

    Ok(payload::encode(&request, encoding))
}

/// Whether the form has enough input to show a preview
#[wasm_bindgen(js_name = isPayloadReady)]
pub fn is_payload_ready(request_js: JsValue) -> Result<bool, JsValue> {
    let request: PayloadRequest = deserialize(request_js, "Invalid payload request")?;
    Ok(request.is_ready())
}

/// Blank request object for a kind, used when the "Type" dropdown changes
#[wasm_bindgen(js_name = blankPayload)]
pub fn blank_payload(kind: &str) -> Result<JsValue, JsValue> {
    let kind: PayloadKind = parse_selector(kind, "Invalid payload kind")?;
    serialize(&PayloadRequest::blank(kind), "Serialization error")
}

/// Request object for the form's initial state
#[wasm_bindgen(js_name = defaultPayload)]
pub fn default_payload() -> Result<JsValue, JsValue> {
    serialize(&PayloadRequest::default(), "Serialization error")
}

/// All payload kinds with their dropdown labels
#[wasm_bindgen(js_name = payloadKinds)]
pub fn payload_kinds() -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();

    for kind in PayloadKind::ALL {
        let option = KindOption {
            value: kind.as_str().to_string(),
            label: kind.label().to_string(),
        };
        array.push(&serialize(&option, "Serialization error")?);
    }

    Ok(array)
}

/// WiFi encryption choices (`value` is what goes after `WIFI:T:`)
#[wasm_bindgen(js_name = wifiEncryptions)]
pub fn wifi_encryptions() -> Result<js_sys::Array, JsValue> {
    let array = js_sys::Array::new();

    for encryption in WifiEncryption::ALL {
        let option = KindOption {
            value: encryption.as_str().to_string(),
            label: encryption.label().to_string(),
        };
        array.push(&serialize(&option, "Serialization error")?);
    }

    Ok(array)
}
