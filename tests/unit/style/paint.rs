use super::*;
use serde_json::json;

fn paint(v: serde_json::Value) -> Paint {
    serde_json::from_value(v).unwrap()
}

#[test]
fn solid_converts_channels_and_defaults_alpha() {
    let p = paint(json!({"type": "SOLID", "color": {"r": 1, "g": 0.5, "b": 0}}));
    assert_eq!(
        resolve_paint(&p),
        SimplifiedFill::Solid {
            kind: PaintKind::Solid,
            hex: "#FF8000".to_string(),
            opacity: 1.0,
        }
    );
}

#[test]
fn solid_opacity_multiplies_color_alpha() {
    let p = paint(json!({
        "type": "SOLID",
        "opacity": 0.5,
        "color": {"r": 0, "g": 0, "b": 0, "a": 0.5}
    }));
    let SimplifiedFill::Solid { opacity, .. } = resolve_paint(&p) else {
        panic!("expected solid");
    };
    assert_eq!(opacity, 0.25);
}

#[test]
fn solid_serializes_with_type_tag() {
    let p = paint(json!({"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1}}));
    let v = serde_json::to_value(resolve_paint(&p)).unwrap();
    assert_eq!(v, json!({"type": "SOLID", "hex": "#0000FF", "opacity": 1.0}));
}

#[test]
fn gradient_keeps_handles_and_resolves_stops() {
    let p = paint(json!({
        "type": "GRADIENT_LINEAR",
        "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 1}],
        "gradientStops": [
            {"position": 0, "color": {"r": 1, "g": 1, "b": 1, "a": 1}},
            {"position": 1, "color": {"r": 0, "g": 0, "b": 0, "a": 0.3}}
        ]
    }));
    let v = serde_json::to_value(resolve_paint(&p)).unwrap();
    assert_eq!(
        v,
        json!({
            "type": "GRADIENT_LINEAR",
            "gradientHandlePositions": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}],
            "gradientStops": [
                {"position": 0.0, "color": {"hex": "#FFFFFF", "opacity": 1.0}},
                {"position": 1.0, "color": {"hex": "#000000", "opacity": 0.3}}
            ]
        })
    );
}

#[test]
fn image_carries_ref_and_scale_mode() {
    let p = paint(json!({"type": "IMAGE", "imageRef": "abc123", "scaleMode": "FILL"}));
    let v = serde_json::to_value(resolve_paint(&p)).unwrap();
    assert_eq!(v, json!({"type": "IMAGE", "imageRef": "abc123", "scaleMode": "FILL"}));
}

#[test]
fn unknown_kinds_keep_only_their_type() {
    let p = paint(json!({"type": "EMOJI"}));
    assert_eq!(
        resolve_paint(&p),
        SimplifiedFill::Other {
            kind: PaintKind::Emoji
        }
    );
}

#[test]
fn resolution_is_deterministic() {
    let p = paint(json!({"type": "SOLID", "color": {"r": 0.13, "g": 0.52, "b": 0.91, "a": 0.77}}));
    let a = serde_json::to_string(&resolve_paint(&p)).unwrap();
    let b = serde_json::to_string(&resolve_paint(&p)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rgba_css_uses_byte_channels() {
    let c = ColorDef {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.25,
    };
    assert_eq!(rgba_css(&c), "rgba(0, 0, 0, 0.25)");
}
