//! Boundary model for design-file REST responses.
//!
//! Every trait group is optional; absence is modeled, not rejected. Enum-valued fields decode
//! unrecognized values into an `Unknown` variant so a newer upstream schema never fails a call.

use crate::foundation::core::{Edges, Point, Rect};
use crate::foundation::error::{SimplifyError, SimplifyResult};
use serde::{Deserialize, Serialize};

/// A full-document or nodes-by-id response, as returned by the fetch collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    /// File name.
    #[serde(default)]
    pub name: String,
    /// Last-modified timestamp, passed through verbatim.
    #[serde(default)]
    pub last_modified: String,
    /// Thumbnail URL, if the upstream supplied one.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Present for full-document responses.
    #[serde(default)]
    pub document: Option<DesignNode>,
    /// Present for nodes-by-id responses. Missing ids come back as `null`.
    #[serde(default)]
    pub nodes: Option<NodeMap>,
}

impl DesignResponse {
    /// Parse a response from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SimplifyResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SimplifyError::serde(format!("parse design response JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> SimplifyResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SimplifyError::serde(format!("parse design response JSON: {e}")))
    }

    /// Decode an already-parsed JSON value, e.g. one handed over by the fetch layer.
    ///
    /// `serde_json::Value` objects are key-sorted, so a nodes map decoded this way has lost the
    /// response's key order; prefer [`Self::from_json_str`] or [`Self::from_reader`] for those.
    pub fn from_json_value(v: serde_json::Value) -> SimplifyResult<Self> {
        serde_json::from_value(v)
            .map_err(|e| SimplifyError::serde(format!("decode design response: {e}")))
    }
}

/// Nodes-by-id map that keeps the response's own key order.
///
/// Roots are walked in this order, and style ids are allocated during the walk, so sorting the
/// keys would renumber every id.
#[derive(Debug, Clone, Default)]
pub struct NodeMap(Vec<(String, Option<NodeEntry>)>);

impl NodeMap {
    pub fn get(&self, id: &str) -> Option<&Option<NodeEntry>> {
        self.0.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Option<NodeEntry>> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for NodeMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NodeMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NodeMapVisitor;

        impl<'de> serde::de::Visitor<'de> for NodeMapVisitor {
            type Value = NodeMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of node id to node entry or null")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<NodeMap, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, Option<NodeEntry>>()? {
                    entries.push((k, v));
                }
                Ok(NodeMap(entries))
            }
        }

        deserializer.deserialize_map(NodeMapVisitor)
    }
}

/// One value of a nodes-by-id response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeEntry {
    /// The requested subtree.
    pub document: DesignNode,
}

/// A node of the design tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    /// Node identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Type tag, e.g. `FRAME`, `TEXT`, `VECTOR`.
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Explicit visibility flag; absent means visible.
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub children: Option<Vec<DesignNode>>,

    // geometry
    #[serde(default)]
    pub absolute_bounding_box: Option<BoundingBox>,

    // paints
    #[serde(default)]
    pub fills: Option<Vec<Paint>>,
    #[serde(default)]
    pub strokes: Option<Vec<Paint>>,
    #[serde(default)]
    pub stroke_weight: Option<f64>,
    #[serde(default)]
    pub individual_stroke_weights: Option<Edges>,
    #[serde(default)]
    pub stroke_dashes: Option<Vec<f64>>,
    #[serde(default)]
    pub effects: Option<Vec<Effect>>,

    // text
    #[serde(default)]
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub characters: Option<String>,

    // appearance
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub rectangle_corner_radii: Option<Vec<f64>>,

    // frame (auto-layout container) properties
    #[serde(default)]
    pub clips_content: Option<bool>,
    #[serde(default)]
    pub layout_mode: Option<LayoutModeDef>,
    #[serde(default)]
    pub primary_axis_align_items: Option<AxisAlignDef>,
    #[serde(default)]
    pub counter_axis_align_items: Option<AxisAlignDef>,
    #[serde(default)]
    pub layout_wrap: Option<LayoutWrapDef>,
    #[serde(default)]
    pub item_spacing: Option<f64>,
    #[serde(default)]
    pub padding_top: Option<f64>,
    #[serde(default)]
    pub padding_right: Option<f64>,
    #[serde(default)]
    pub padding_bottom: Option<f64>,
    #[serde(default)]
    pub padding_left: Option<f64>,
    #[serde(default)]
    pub overflow_direction: Option<OverflowDirectionDef>,

    // per-child layout properties
    #[serde(default)]
    pub layout_align: Option<LayoutAlignDef>,
    #[serde(default)]
    pub layout_grow: Option<f64>,
    #[serde(default)]
    pub layout_positioning: Option<LayoutPositioningDef>,
    #[serde(default)]
    pub layout_sizing_horizontal: Option<LayoutSizingDef>,
    #[serde(default)]
    pub layout_sizing_vertical: Option<LayoutSizingDef>,
    #[serde(default)]
    pub preserve_ratio: Option<bool>,
}

/// Absolute bounding box in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl BoundingBox {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin(), (self.width, self.height))
    }
}

/// Normalized RGBA color, each channel in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDef {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    Video,
    Pattern,
    #[serde(other)]
    Unknown,
}

impl PaintKind {
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            Self::GradientLinear
                | Self::GradientRadial
                | Self::GradientAngular
                | Self::GradientDiamond
        )
    }
}

/// One raw fill or stroke paint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub color: Option<ColorDef>,
    #[serde(default)]
    pub gradient_handle_positions: Option<Vec<Point>>,
    #[serde(default)]
    pub gradient_stops: Option<Vec<ColorStopDef>>,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub scale_mode: Option<ScaleModeDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorStopDef {
    pub position: f64,
    pub color: ColorDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleModeDef {
    Fill,
    Fit,
    Tile,
    Stretch,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Unknown,
}

/// One raw shadow or blur effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub color: Option<ColorDef>,
    #[serde(default)]
    pub offset: Option<Point>,
    #[serde(default)]
    pub spread: Option<f64>,
}

/// Raw text style. Enum-like fields stay strings and pass through verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_weight: Option<f64>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub text_case: Option<String>,
    #[serde(default)]
    pub text_align_horizontal: Option<String>,
    #[serde(default)]
    pub text_align_vertical: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutModeDef {
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlignDef {
    Min,
    Max,
    Center,
    SpaceBetween,
    Baseline,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutWrapDef {
    NoWrap,
    Wrap,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverflowDirectionDef {
    None,
    HorizontalScrolling,
    VerticalScrolling,
    HorizontalAndVerticalScrolling,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutAlignDef {
    Inherit,
    Min,
    Max,
    Center,
    Stretch,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutPositioningDef {
    Auto,
    Absolute,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutSizingDef {
    Fixed,
    Fill,
    Hug,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
