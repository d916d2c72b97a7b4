//! Payload string construction
//!
//! Straight templating per kind. Field values are never escaped, so a `;`
//! inside an SSID lands in the payload unchanged.

use super::encoding::TextEncoding;
use super::request::PayloadRequest;

/// Build the payload for `request` and run the `encoding` pass over it
pub fn encode(request: &PayloadRequest, encoding: TextEncoding) -> String {
    let raw = format_payload(request);
    log::debug!("encode {:?} ({} bytes) with {}", request.kind(), raw.len(), encoding);
    encoding.apply(&raw)
}

/// Build the payload for `request` without any encoding pass
pub fn format_payload(request: &PayloadRequest) -> String {
    match request {
        PayloadRequest::Text { value } => value.clone(),
        PayloadRequest::Email { address } => format!("mailto:{}", address),
        PayloadRequest::Phone { number } => format!("tel:{}", number),
        PayloadRequest::Wifi { ssid, password, encryption } => {
            format!("WIFI:T:{};S:{};P:{};;", encryption, ssid, password)
        }
        PayloadRequest::Event { summary, location, start, end } => [
            "BEGIN:VEVENT".to_string(),
            format!("SUMMARY:{}", summary),
            format!("LOCATION:{}", location),
            format!("DTSTART:{}", compact_timestamp(start)),
            format!("DTEND:{}", compact_timestamp(end)),
            "END:VEVENT".to_string(),
        ]
        .join("\n"),
        PayloadRequest::Vcard { name, phone, email, org } => [
            "BEGIN:VCARD".to_string(),
            "VERSION:3.0".to_string(),
            format!("FN:{}", name),
            format!("ORG:{}", org),
            format!("TEL:{}", phone),
            format!("EMAIL:{}", email),
            "END:VCARD".to_string(),
        ]
        .join("\n"),
    }
}

/// Drop every '-' and ':' ("2024-05-01T09:30" -> "20240501T0930")
fn compact_timestamp(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '-' | ':')).collect()
}
