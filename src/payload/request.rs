//! Payload request records
//!
//! One variant per QR payload kind. The `kind` tag and field names match
//! what the QR form sends across the JS boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSelectorError;

/// Initial value of the text/URL form field
pub const DEFAULT_TEXT: &str = "https://qr-code.bwanji.digital.com";

/// WiFi authentication type, written verbatim after `WIFI:T:`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiEncryption {
    pub const ALL: [WifiEncryption; 3] = [WifiEncryption::Wpa, WifiEncryption::Wep, WifiEncryption::NoPass];

    pub fn as_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::NoPass => "nopass",
        }
    }

    /// Label shown in the encryption dropdown
    pub fn label(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA/WPA2",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::NoPass => "None",
        }
    }
}

impl fmt::Display for WifiEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WifiEncryption {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WPA" => Ok(WifiEncryption::Wpa),
            "WEP" => Ok(WifiEncryption::Wep),
            "nopass" => Ok(WifiEncryption::NoPass),
            other => Err(ParseSelectorError::unknown("wifi encryption", other)),
        }
    }
}

/// Payload kind without its fields (the "Type" dropdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Text,
    Email,
    Phone,
    Wifi,
    Event,
    Vcard,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 6] = [
        PayloadKind::Text,
        PayloadKind::Email,
        PayloadKind::Phone,
        PayloadKind::Wifi,
        PayloadKind::Event,
        PayloadKind::Vcard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Text => "text",
            PayloadKind::Email => "email",
            PayloadKind::Phone => "phone",
            PayloadKind::Wifi => "wifi",
            PayloadKind::Event => "event",
            PayloadKind::Vcard => "vcard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PayloadKind::Text => "Text/URL",
            PayloadKind::Email => "Email",
            PayloadKind::Phone => "Phone",
            PayloadKind::Wifi => "WiFi",
            PayloadKind::Event => "Event",
            PayloadKind::Vcard => "vCard",
        }
    }
}

impl FromStr for PayloadKind {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayloadKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseSelectorError::unknown("payload kind", s))
    }
}

/// A structured QR payload request
///
/// Fields are opaque strings. Nothing is validated: an empty SSID or a
/// malformed date goes into the payload as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PayloadRequest {
    Text {
        #[serde(default)]
        value: String,
    },
    Email {
        #[serde(default)]
        address: String,
    },
    Phone {
        #[serde(default)]
        number: String,
    },
    Wifi {
        #[serde(default)]
        ssid: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        encryption: WifiEncryption,
    },
    Event {
        #[serde(default)]
        summary: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        start: String,
        #[serde(default)]
        end: String,
    },
    Vcard {
        #[serde(default)]
        name: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        org: String,
    },
}

impl PayloadRequest {
    /// An empty request of the given kind
    pub fn blank(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::Text => PayloadRequest::Text { value: String::new() },
            PayloadKind::Email => PayloadRequest::Email { address: String::new() },
            PayloadKind::Phone => PayloadRequest::Phone { number: String::new() },
            PayloadKind::Wifi => PayloadRequest::Wifi {
                ssid: String::new(),
                password: String::new(),
                encryption: WifiEncryption::default(),
            },
            PayloadKind::Event => PayloadRequest::Event {
                summary: String::new(),
                location: String::new(),
                start: String::new(),
                end: String::new(),
            },
            PayloadKind::Vcard => PayloadRequest::Vcard {
                name: String::new(),
                phone: String::new(),
                email: String::new(),
                org: String::new(),
            },
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            PayloadRequest::Text { .. } => PayloadKind::Text,
            PayloadRequest::Email { .. } => PayloadKind::Email,
            PayloadRequest::Phone { .. } => PayloadKind::Phone,
            PayloadRequest::Wifi { .. } => PayloadKind::Wifi,
            PayloadRequest::Event { .. } => PayloadKind::Event,
            PayloadRequest::Vcard { .. } => PayloadKind::Vcard,
        }
    }

    /// The field the form requires before it shows a preview
    pub fn primary_field(&self) -> &str {
        match self {
            PayloadRequest::Text { value } => value,
            PayloadRequest::Email { address } => address,
            PayloadRequest::Phone { number } => number,
            PayloadRequest::Wifi { ssid, .. } => ssid,
            PayloadRequest::Event { summary, .. } => summary,
            PayloadRequest::Vcard { name, .. } => name,
        }
    }

    /// True once the primary field holds something other than whitespace
    pub fn is_ready(&self) -> bool {
        !self.primary_field().trim().is_empty()
    }
}

impl Default for PayloadRequest {
    fn default() -> Self {
        PayloadRequest::Text {
            value: DEFAULT_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_request() {
        let json = r#"{"kind":"wifi","ssid":"Home","password":"pw","encryption":"WEP"}"#;
        let req: PayloadRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req,
            PayloadRequest::Wifi {
                ssid: "Home".to_string(),
                password: "pw".to_string(),
                encryption: WifiEncryption::Wep,
            }
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: PayloadRequest = serde_json::from_str(r#"{"kind":"wifi","ssid":"Cafe"}"#).unwrap();
        match req {
            PayloadRequest::Wifi { ssid, password, encryption } => {
                assert_eq!(ssid, "Cafe");
                assert_eq!(password, "");
                assert_eq!(encryption, WifiEncryption::Wpa);
            }
            other => panic!("expected wifi request, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let res: Result<PayloadRequest, _> = serde_json::from_str(r#"{"kind":"sms","number":"1"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_blank_matches_kind() {
        for kind in PayloadKind::ALL {
            let req = PayloadRequest::blank(kind);
            assert_eq!(req.kind(), kind);
            assert!(!req.is_ready());
        }
    }

    #[test]
    fn test_is_ready_trims_whitespace() {
        let req = PayloadRequest::Email { address: "   ".to_string() };
        assert!(!req.is_ready());

        let req = PayloadRequest::Event {
            summary: "Launch".to_string(),
            location: String::new(),
            start: String::new(),
            end: String::new(),
        };
        assert!(req.is_ready());
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        assert_eq!("vcard".parse::<PayloadKind>(), Ok(PayloadKind::Vcard));
        assert_eq!(PayloadKind::Wifi.label(), "WiFi");
        assert!("VCARD".parse::<PayloadKind>().is_err());
    }

    #[test]
    fn test_wifi_encryption_options() {
        let values: Vec<&str> = WifiEncryption::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(values, ["WPA", "WEP", "nopass"]);
        assert_eq!(WifiEncryption::NoPass.label(), "None");
        assert_eq!("nopass".parse::<WifiEncryption>(), Ok(WifiEncryption::NoPass));
    }

    #[test]
    fn test_default_request_is_site_url() {
        assert_eq!(PayloadRequest::default().primary_field(), DEFAULT_TEXT);
    }
}
