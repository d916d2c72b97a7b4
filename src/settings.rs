//! QR generator settings and export geometry
//!
//! The settings panel picks a size preset, a DPI, an encoding, and whether a
//! logo is overlaid. Rendering and rasterising happen elsewhere. This module
//! only derives the numbers the renderer needs.

use serde::{Deserialize, Serialize};

use crate::payload::TextEncoding;

/// On-screen preview edge in CSS pixels (independent of the export preset)
pub const PREVIEW_SIZE: u32 = 238;

/// Reference CSS DPI the export scale is relative to
pub const CSS_DPI: u32 = 96;

/// Logo edge as a fraction of the QR edge, in percent
pub const LOGO_PERCENT: u32 = 15;

/// Export size preset (logical edge length in pixels)
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum QrSize {
    #[default]
    Small = 238,
    Medium = 938,
    Large = 1238,
}

impl QrSize {
    pub const ALL: [QrSize; 3] = [QrSize::Small, QrSize::Medium, QrSize::Large];

    pub fn pixels(&self) -> u32 {
        *self as u32
    }

    pub fn label(&self) -> &'static str {
        match self {
            QrSize::Small => "Small (238px)",
            QrSize::Medium => "Medium (938px)",
            QrSize::Large => "Large (1238px)",
        }
    }
}

/// Export resolution
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Dpi {
    Screen = 72,
    Draft = 150,
    #[default]
    Print = 300,
    High = 450,
    Max = 600,
}

impl Dpi {
    pub const ALL: [Dpi; 5] = [Dpi::Screen, Dpi::Draft, Dpi::Print, Dpi::High, Dpi::Max];

    pub fn value(&self) -> u32 {
        *self as u32
    }
}

/// Settings panel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrSettings {
    pub size: QrSize,
    pub encoding: TextEncoding,
    pub dpi: Dpi,
    pub has_logo: bool,
}

/// Pixel numbers for preview and PNG export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportGeometry {
    /// Edge length the QR vector is rendered at before rasterising
    pub logical_size: u32,
    /// Canvas edge after DPI scaling
    pub canvas_size: u32,
    /// Logo edge at export size
    pub logo_size: Option<u32>,
    /// Logo edge in the on-screen preview
    pub preview_logo_size: Option<u32>,
    pub file_name: String,
}

impl QrSettings {
    /// Parse settings from JSON; absent keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn export_geometry(&self) -> ExportGeometry {
        let logical_size = self.size.pixels();
        let logo = |edge: u32| self.has_logo.then(|| logo_size(edge));

        ExportGeometry {
            logical_size,
            canvas_size: canvas_size(logical_size, self.dpi),
            logo_size: logo(logical_size),
            preview_logo_size: logo(PREVIEW_SIZE),
            file_name: format!("qrcode_{}dpi.png", self.dpi.value()),
        }
    }
}

/// `round(size * dpi / 96)`
pub fn canvas_size(size: u32, dpi: Dpi) -> u32 {
    rounded_ratio(size * dpi.value(), CSS_DPI)
}

/// `round(size * 0.15)`
pub fn logo_size(size: u32) -> u32 {
    rounded_ratio(size * LOGO_PERCENT, 100)
}

/// Integer division rounding halves up
fn rounded_ratio(num: u32, den: u32) -> u32 {
    (num + den / 2) / den
}
