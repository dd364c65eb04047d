use crate::foundation::core::px;
use crate::scene::model::{DesignNode, Effect, EffectKind};
use crate::scene::probe::is_visible_flag;
use crate::style::paint::rgba_css;
use serde::Serialize;

/// Canonical shadow/blur description, as CSS property values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
}

impl SimplifiedEffects {
    pub fn is_empty(&self) -> bool {
        self.box_shadow.is_none()
            && self.text_shadow.is_none()
            && self.filter.is_none()
            && self.backdrop_filter.is_none()
    }
}

pub fn build_effects(node: &DesignNode) -> SimplifiedEffects {
    let Some(effects) = node.effects() else {
        return SimplifiedEffects::default();
    };
    let visible: Vec<&Effect> = effects
        .iter()
        .filter(|e| is_visible_flag(e.visible))
        .collect();

    // Drop shadows first, then inner shadows, matching CSS paint order.
    let shadows = visible
        .iter()
        .filter(|e| e.kind == EffectKind::DropShadow)
        .chain(visible.iter().filter(|e| e.kind == EffectKind::InnerShadow))
        .map(|e| shadow_css(e))
        .collect::<Vec<_>>();

    let mut out = SimplifiedEffects {
        filter: join_nonempty(blurs(&visible, EffectKind::LayerBlur), " "),
        backdrop_filter: join_nonempty(blurs(&visible, EffectKind::BackgroundBlur), " "),
        ..SimplifiedEffects::default()
    };
    let shadow = join_nonempty(shadows, ", ");
    if node.node_type == "TEXT" {
        out.text_shadow = shadow;
    } else {
        out.box_shadow = shadow;
    }
    out
}

fn shadow_css(e: &Effect) -> String {
    let offset = e.offset.unwrap_or_default();
    let color = e.color.map(|c| rgba_css(&c)).unwrap_or_else(|| "rgba(0, 0, 0, 1)".to_string());
    let inset = if e.kind == EffectKind::InnerShadow {
        "inset "
    } else {
        ""
    };
    format!(
        "{inset}{} {} {} {} {color}",
        px(offset.x),
        px(offset.y),
        px(e.radius),
        px(e.spread.unwrap_or(0.0))
    )
}

fn blurs(effects: &[&Effect], kind: EffectKind) -> Vec<String> {
    effects
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| format!("blur({})", px(e.radius)))
        .collect()
}

fn join_nonempty(parts: Vec<String>, sep: &str) -> Option<String> {
    (!parts.is_empty()).then(|| parts.join(sep))
}

#[cfg(test)]
#[path = "../../tests/unit/style/effects.rs"]
mod tests;
