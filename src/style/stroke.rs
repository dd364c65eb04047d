use crate::foundation::core::px;
use crate::scene::model::DesignNode;
use crate::scene::probe::is_visible_flag;
use crate::style::paint::{SimplifiedFill, resolve_paints};
use serde::Serialize;

/// Canonical border description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedStroke {
    pub colors: Vec<SimplifiedFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dashes: Option<Vec<f64>>,
}

impl SimplifiedStroke {
    /// A stroke is worth referencing only when it paints something.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

pub fn build_strokes(node: &DesignNode) -> SimplifiedStroke {
    let colors = node
        .strokes()
        .map(|s| resolve_paints(s.iter().filter(|p| is_visible_flag(p.visible))))
        .unwrap_or_default();

    // Per-edge weights win over the uniform weight.
    let stroke_weight = match node.individual_stroke_weights() {
        Some(edges) => Some(edges.css_shorthand()),
        None => node.uniform_stroke_weight().map(px),
    };

    SimplifiedStroke {
        colors,
        stroke_weight,
        stroke_dashes: node.stroke_dashes().map(<[f64]>::to_vec),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/stroke.rs"]
mod tests;
