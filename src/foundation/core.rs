pub use kurbo::{Point, Rect, Vec2};

/// Four per-edge values in CSS order (top, right, bottom, left).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
    /// Left edge.
    #[serde(default)]
    pub left: f64,
}

impl Edges {
    /// Build edges from explicit values.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Return `true` when every edge is zero.
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Render as a 4-value CSS shorthand, e.g. `"1px 2px 3px 4px"`.
    pub fn css_shorthand(&self) -> String {
        format!(
            "{} {} {} {}",
            px(self.top),
            px(self.right),
            px(self.bottom),
            px(self.left)
        )
    }
}

/// Format a pixel length using the shortest round-trip float form (`8px`, `1.5px`).
pub fn px(v: f64) -> String {
    format!("{v}px")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
