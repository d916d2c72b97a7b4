//! QR payload encoder
//!
//! Turns a structured request (email, phone, WiFi credentials, calendar
//! event, contact card, or plain text) into the string a QR scanner app
//! recognises, then applies the selected text encoding pass.
//!
//! ## Modules
//!
//! - `request`: the tagged request record and its kinds
//! - `encoding`: UTF-8 / ANSI / Cyrillic post-pass
//! - `encoder`: per-kind templating

pub mod encoder;
pub mod encoding;
pub mod request;

pub use encoder::{encode, format_payload};
pub use encoding::TextEncoding;
pub use request::{PayloadKind, PayloadRequest, WifiEncryption, DEFAULT_TEXT};
