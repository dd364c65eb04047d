use crate::foundation::core::Point;
use crate::foundation::math::{channel_to_u8, round2};
use crate::scene::model::{ColorDef, Paint, PaintKind, ScaleModeDef};
use serde::Serialize;

/// Canonical fill value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum SimplifiedFill {
    /// Solid color.
    Solid {
        #[serde(rename = "type")]
        kind: PaintKind,
        hex: String,
        opacity: f64,
    },
    /// Linear, radial, angular or diamond gradient.
    Gradient {
        #[serde(rename = "type")]
        kind: PaintKind,
        gradient_handle_positions: Vec<Point>,
        gradient_stops: Vec<GradientStop>,
    },
    /// Image reference, rasterized downstream.
    Image {
        #[serde(rename = "type")]
        kind: PaintKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_ref: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scale_mode: Option<ScaleModeDef>,
    },
    /// Paint kinds without a canonical form beyond their type.
    Other {
        #[serde(rename = "type")]
        kind: PaintKind,
    },
}

/// Resolved color: upper-case `#RRGGBB` plus alpha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    pub hex: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: ColorValue,
}

pub fn resolve_paint(paint: &Paint) -> SimplifiedFill {
    match paint.kind {
        PaintKind::Solid => match paint.color.as_ref() {
            Some(c) => {
                let ColorValue { hex, opacity } = color_value(c, paint.opacity.unwrap_or(1.0));
                SimplifiedFill::Solid {
                    kind: PaintKind::Solid,
                    hex,
                    opacity,
                }
            }
            None => SimplifiedFill::Other {
                kind: PaintKind::Solid,
            },
        },
        kind if kind.is_gradient() => SimplifiedFill::Gradient {
            kind,
            gradient_handle_positions: paint.gradient_handle_positions.clone().unwrap_or_default(),
            gradient_stops: paint
                .gradient_stops
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|s| GradientStop {
                    position: s.position,
                    color: color_value(&s.color, 1.0),
                })
                .collect(),
        },
        PaintKind::Image => SimplifiedFill::Image {
            kind: PaintKind::Image,
            image_ref: paint.image_ref.clone(),
            scale_mode: paint.scale_mode,
        },
        kind => {
            tracing::debug!(?kind, "paint kind has no canonical form beyond its type");
            SimplifiedFill::Other { kind }
        }
    }
}

pub fn resolve_paints<'a>(paints: impl IntoIterator<Item = &'a Paint>) -> Vec<SimplifiedFill> {
    paints.into_iter().map(resolve_paint).collect()
}

/// Resolve a color with an extra opacity multiplier.
pub fn color_value(c: &ColorDef, opacity: f64) -> ColorValue {
    ColorValue {
        hex: hex(c),
        opacity: round2(opacity * c.a),
    }
}

pub fn hex(c: &ColorDef) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_to_u8(c.r),
        channel_to_u8(c.g),
        channel_to_u8(c.b)
    )
}

/// CSS `rgba(r, g, b, a)` with 0-255 channels and the color's own alpha.
pub fn rgba_css(c: &ColorDef) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        channel_to_u8(c.r),
        channel_to_u8(c.g),
        channel_to_u8(c.b),
        round2(c.a)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/style/paint.rs"]
mod tests;
