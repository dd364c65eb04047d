use crate::foundation::math::finite_ratio;
use crate::scene::model::TypeStyle;
use serde::Serialize;

/// Canonical text style; line height and letter spacing are relative to font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
}

impl SimplifiedTextStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub fn build_text_style(style: &TypeStyle) -> SimplifiedTextStyle {
    let size = style.font_size.filter(|s| *s != 0.0);
    let line_height = style
        .line_height_px
        .zip(size)
        .and_then(|(lh, fs)| finite_ratio(lh, fs))
        .map(|r| format!("{r}em"));
    let letter_spacing = style
        .letter_spacing
        .filter(|ls| *ls != 0.0)
        .zip(size)
        .and_then(|(ls, fs)| finite_ratio(ls, fs))
        .map(|r| format!("{}%", r * 100.0));

    SimplifiedTextStyle {
        font_family: style.font_family.clone(),
        font_weight: style.font_weight,
        font_size: style.font_size,
        line_height,
        letter_spacing,
        text_case: style.text_case.clone(),
        text_align_horizontal: style.text_align_horizontal.clone(),
        text_align_vertical: style.text_align_vertical.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/text.rs"]
mod tests;
