// QR settings panel and export geometry

use qrsocial_wasm::settings::{canvas_size, logo_size, Dpi, QrSettings, QrSize, PREVIEW_SIZE};
use qrsocial_wasm::TextEncoding;

#[test]
fn test_every_preset_and_dpi_scales_from_96() {
    for size in QrSize::ALL {
        for dpi in Dpi::ALL {
            let expected = (size.pixels() as f64 * dpi.value() as f64 / 96.0).round() as u32;
            assert_eq!(canvas_size(size.pixels(), dpi), expected, "{:?} @ {:?}", size, dpi);
        }
    }
}

#[test]
fn test_logo_is_fifteen_percent() {
    assert_eq!(logo_size(PREVIEW_SIZE), 36);
    assert_eq!(logo_size(QrSize::Medium.pixels()), 141);
    assert_eq!(logo_size(QrSize::Large.pixels()), 186);
}

#[test]
fn test_geometry_with_logo() {
    let settings = QrSettings {
        size: QrSize::Medium,
        dpi: Dpi::Screen,
        encoding: TextEncoding::Utf8,
        has_logo: true,
    };
    let geometry = settings.export_geometry();
    assert_eq!(geometry.logical_size, 938);
    assert_eq!(geometry.canvas_size, 704); // 703.5
    assert_eq!(geometry.logo_size, Some(141));
    assert_eq!(geometry.preview_logo_size, Some(36));
    assert_eq!(geometry.file_name, "qrcode_72dpi.png");
}

#[test]
fn test_settings_json_round_trip() {
    let settings = QrSettings {
        size: QrSize::Large,
        dpi: Dpi::High,
        encoding: TextEncoding::Cyrillic,
        has_logo: true,
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(json.contains("\"size\":1238"));
    assert!(json.contains("\"hasLogo\":true"));
    assert_eq!(QrSettings::from_json(&json).unwrap(), settings);
}

#[test]
fn test_empty_json_is_default() {
    assert_eq!(QrSettings::from_json("{}").unwrap(), QrSettings::default());
}
