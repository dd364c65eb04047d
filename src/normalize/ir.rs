use crate::layout::translate::SimplifiedLayout;
use crate::style::effects::SimplifiedEffects;
use crate::style::paint::SimplifiedFill;
use crate::style::stroke::SimplifiedStroke;
use crate::style::text::SimplifiedTextStyle;
use serde::Serialize;
use serde::ser::SerializeMap;

/// Type tag given to vector nodes; they are rasterized downstream, not emitted as markup.
pub const VECTOR_IMAGE_TYPE: &str = "IMAGE-SVG";

/// Opaque reference into [`GlobalVars`], e.g. `fill_3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StyleId(pub(crate) String);

impl StyleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Style value category; each has its own id prefix and counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Text,
    Fill,
    Stroke,
    Effect,
    Layout,
}

impl StyleCategory {
    pub(crate) const COUNT: usize = 5;

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Text => "style",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::Effect => "effect",
            Self::Layout => "layout",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One canonical style value held by [`GlobalVars`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    TextStyle(SimplifiedTextStyle),
    Fills(Vec<SimplifiedFill>),
    Stroke(SimplifiedStroke),
    Effects(SimplifiedEffects),
    Layout(SimplifiedLayout),
}

impl StyleValue {
    pub fn category(&self) -> StyleCategory {
        match self {
            Self::TextStyle(_) => StyleCategory::Text,
            Self::Fills(_) => StyleCategory::Fill,
            Self::Stroke(_) => StyleCategory::Stroke,
            Self::Effects(_) => StyleCategory::Effect,
            Self::Layout(_) => StyleCategory::Layout,
        }
    }
}

/// Deduplicated style table produced by one simplification call.
///
/// Serializes as `{"styles": {id: value, ...}}` in allocation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalVars {
    pub(crate) styles: Vec<(StyleId, StyleValue)>,
}

impl GlobalVars {
    pub fn get(&self, id: &StyleId) -> Option<&StyleValue> {
        self.styles.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleId, &StyleValue)> {
        self.styles.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Serialize for GlobalVars {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Styles<'a>(&'a [(StyleId, StyleValue)]);

        impl Serialize for Styles<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (k, v) in self.0 {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("styles", &Styles(&self.styles))?;
        map.end()
    }
}

/// Simplified node. Optional fields that would be empty are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<StyleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<StyleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<StyleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<StyleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<StyleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SimplifiedNode>>,
}

impl SimplifiedNode {
    /// `true` when the record carries nothing at all, identity included.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of nodes in this subtree, self included.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(SimplifiedNode::subtree_len)
            .sum::<usize>()
    }
}

/// Result of one simplification call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedDesign {
    pub name: String,
    pub last_modified: String,
    pub thumbnail_url: String,
    pub nodes: Vec<SimplifiedNode>,
    pub global_vars: GlobalVars,
}

impl SimplifiedDesign {
    pub fn to_json(&self) -> crate::SimplifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::SimplifyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
