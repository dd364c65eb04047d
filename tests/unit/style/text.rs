use super::*;
use serde_json::json;

fn style(v: serde_json::Value) -> TypeStyle {
    serde_json::from_value(v).unwrap()
}

#[test]
fn line_height_and_letter_spacing_are_relative() {
    let s = build_text_style(&style(json!({
        "fontFamily": "Inter",
        "fontWeight": 600,
        "fontSize": 16,
        "lineHeightPx": 24,
        "letterSpacing": 0.8,
        "textAlignHorizontal": "LEFT"
    })));
    assert_eq!(s.font_family.as_deref(), Some("Inter"));
    assert_eq!(s.font_weight, Some(600.0));
    assert_eq!(s.line_height.as_deref(), Some("1.5em"));
    assert_eq!(s.letter_spacing.as_deref(), Some("5%"));
    assert_eq!(s.text_align_horizontal.as_deref(), Some("LEFT"));
}

#[test]
fn zero_letter_spacing_and_missing_size_are_omitted() {
    let s = build_text_style(&style(json!({"lineHeightPx": 20, "letterSpacing": 0})));
    assert!(s.line_height.is_none());
    assert!(s.letter_spacing.is_none());
    assert!(s.is_empty());
}

#[test]
fn zero_font_size_does_not_divide() {
    let s = build_text_style(&style(json!({"fontSize": 0, "lineHeightPx": 20})));
    assert_eq!(s.font_size, Some(0.0));
    assert!(s.line_height.is_none());
}

#[test]
fn serialization_skips_absent_fields() {
    let s = build_text_style(&style(json!({"fontSize": 12})));
    assert_eq!(serde_json::to_value(&s).unwrap(), json!({"fontSize": 12.0}));
}
