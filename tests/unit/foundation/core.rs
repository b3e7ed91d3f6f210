use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::from_hex("#3b82f6").unwrap(), Rgb8::new(0x3B, 0x82, 0xF6));
    assert_eq!(Rgb8::from_hex("22C55E").unwrap(), Rgb8::new(0x22, 0xC5, 0x5E));
    assert!(Rgb8::from_hex("#fff").is_err());
    assert!(Rgb8::from_hex("#gg0000").is_err());
}

#[test]
fn serde_uses_hex_strings_and_accepts_arrays() {
    let c = Rgb8::new(255, 0, 16);
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#FF0010"));

    let parsed: Rgb8 = serde_json::from_value(json!("#ff0010")).unwrap();
    assert_eq!(parsed, c);

    let parsed: Rgb8 = serde_json::from_value(json!([255, 0, 16])).unwrap();
    assert_eq!(parsed, c);
}

#[test]
fn baseline_defaults_fill_missing_fields() {
    let b: Baseline = serde_json::from_value(json!({"lived": "#000000"})).unwrap();
    assert_eq!(b.lived, Rgb8::new(0, 0, 0));
    assert_eq!(b.unlived, Baseline::default().unlived);
    assert_ne!(b.lived, b.unlived);
}
