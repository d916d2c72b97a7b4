// QR payload encoding across all request kinds and encodings

use qrsocial_wasm::payload::{encode, format_payload, PayloadKind, PayloadRequest, TextEncoding, WifiEncryption};

/// Build a vCard request from plain strs
fn vcard(name: &str, phone: &str, email: &str, org: &str) -> PayloadRequest {
    PayloadRequest::Vcard {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        org: org.to_string(),
    }
}

#[test]
fn test_vcard_layout() {
    let payload = encode(&vcard("Jo", "1", "a@b", "X"), TextEncoding::Utf8);
    assert_eq!(payload, "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nORG:X\nTEL:1\nEMAIL:a@b\nEND:VCARD");
}

#[test]
fn test_email_prefix_keeps_address_verbatim() {
    for address in ["jo@example.com", "", "not an email", "a+b@c.d?subject=hi"] {
        let payload = encode(&PayloadRequest::Email { address: address.to_string() }, TextEncoding::Utf8);
        assert!(payload.starts_with("mailto:"));
        assert_eq!(&payload["mailto:".len()..], address);
    }
}

#[test]
fn test_wifi_template_for_each_encryption() {
    for (encryption, tag) in [
        (WifiEncryption::Wpa, "WPA"),
        (WifiEncryption::Wep, "WEP"),
        (WifiEncryption::NoPass, "nopass"),
    ] {
        let request = PayloadRequest::Wifi {
            ssid: "Cafe;Guest".to_string(),
            password: "p;a:s\\s".to_string(),
            encryption,
        };
        assert_eq!(
            format_payload(&request),
            format!("WIFI:T:{};S:Cafe;Guest;P:p;a:s\\s;;", tag)
        );
    }
}

#[test]
fn test_event_from_datetime_local_inputs() {
    let request = PayloadRequest::Event {
        summary: "Team lunch".to_string(),
        location: "Cafe, 2nd floor".to_string(),
        start: "2025-03-14T12:00".to_string(),
        end: "2025-03-14T13:30".to_string(),
    };

    let payload = encode(&request, TextEncoding::Utf8);
    let lines: Vec<&str> = payload.lines().collect();
    assert_eq!(
        lines,
        vec![
            "BEGIN:VEVENT",
            "SUMMARY:Team lunch",
            "LOCATION:Cafe, 2nd floor",
            "DTSTART:20250314T1200",
            "DTEND:20250314T1330",
            "END:VEVENT",
        ]
    );
}

#[test]
fn test_blank_requests_still_well_formed() {
    assert_eq!(format_payload(&PayloadRequest::blank(PayloadKind::Phone)), "tel:");
    assert_eq!(format_payload(&PayloadRequest::blank(PayloadKind::Wifi)), "WIFI:T:WPA;S:;P:;;");
    assert_eq!(format_payload(&PayloadRequest::blank(PayloadKind::Text)), "");
}

#[test]
fn test_ansi_strips_vcard_accents() {
    let payload = encode(&vcard("José Müller", "+49 30", "jm@example.de", "Bäckerei"), TextEncoding::Ansi);
    assert!(payload.contains("FN:Jos Mller"));
    assert!(payload.contains("ORG:Bckerei"));
    assert!(payload.is_ascii());
}

#[test]
fn test_ansi_idempotent_on_payloads() {
    let request = PayloadRequest::Text { value: "naïve café → 𝗯𝗼𝗹𝗱".to_string() };
    let once = encode(&request, TextEncoding::Ansi);
    assert_eq!(TextEncoding::Ansi.apply(&once), once);
    assert_eq!(once, "nave caf  ");
}

#[test]
fn test_cyrillic_is_tag_only() {
    let request = PayloadRequest::Text { value: "Москва".to_string() };
    assert_eq!(encode(&request, TextEncoding::Cyrillic), "Cyrillic:Москва");
}

#[test]
fn test_request_from_form_json() {
    // Shape sent by the QR form
    let json = r#"{
        "kind": "vcard",
        "name": "Ada Lovelace",
        "phone": "+44 20 7946 0958",
        "email": "ada@example.org",
        "org": "Analytical Engines"
    }"#;
    let request: PayloadRequest = serde_json::from_str(json).unwrap();
    assert!(request.is_ready());
    assert_eq!(
        encode(&request, TextEncoding::Utf8),
        "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nORG:Analytical Engines\nTEL:+44 20 7946 0958\nEMAIL:ada@example.org\nEND:VCARD"
    );
}

#[test]
fn test_request_serializes_with_kind_tag() {
    let json = serde_json::to_value(PayloadRequest::Phone { number: "123".to_string() }).unwrap();
    assert_eq!(json["kind"], "phone");
    assert_eq!(json["number"], "123");
}
