//! Capability probes over [`DesignNode`] trait groups.
//!
//! Each probe returns `Some(view)` only when the trait group is present *and* carries meaning;
//! empty lists, empty strings and zero-only values route through the `None` path.

use crate::foundation::core::Edges;
use crate::scene::model::{
    AxisAlignDef, BoundingBox, DesignNode, Effect, LayoutAlignDef, LayoutModeDef,
    LayoutPositioningDef, LayoutSizingDef, LayoutWrapDef, OverflowDirectionDef, Paint, TypeStyle,
};

/// Present-and-meaningful test shared by all probes.
pub(crate) fn probe<'a, T: ?Sized>(
    value: Option<&'a T>,
    refine: impl FnOnce(&T) -> bool,
) -> Option<&'a T> {
    value.filter(|v| refine(v))
}

/// Visibility flag shared by nodes, paints and effects; absent means visible.
pub(crate) fn is_visible_flag(visible: Option<bool>) -> bool {
    visible.unwrap_or(true)
}

impl DesignNode {
    pub fn is_visible(&self) -> bool {
        is_visible_flag(self.visible)
    }

    /// Non-empty child list, unfiltered.
    pub fn children(&self) -> Option<&[DesignNode]> {
        probe(self.children.as_deref(), |c| !c.is_empty())
    }

    /// Children that survive the visibility filter.
    pub fn visible_children(&self) -> impl Iterator<Item = &DesignNode> {
        self.children().unwrap_or(&[]).iter().filter(|c| c.is_visible())
    }

    pub fn fills(&self) -> Option<&[Paint]> {
        probe(self.fills.as_deref(), |f| !f.is_empty())
    }

    pub fn strokes(&self) -> Option<&[Paint]> {
        probe(self.strokes.as_deref(), |s| !s.is_empty())
    }

    pub fn effects(&self) -> Option<&[Effect]> {
        probe(self.effects.as_deref(), |e| !e.is_empty())
    }

    pub fn text_style(&self) -> Option<&TypeStyle> {
        probe(self.style.as_ref(), |s| {
            s.font_family.is_some()
                || s.font_weight.is_some()
                || s.font_size.is_some()
                || s.line_height_px.is_some()
                || s.letter_spacing.is_some()
                || s.text_case.is_some()
                || s.text_align_horizontal.is_some()
                || s.text_align_vertical.is_some()
        })
    }

    pub fn characters(&self) -> Option<&str> {
        probe(self.characters.as_deref(), |s| !s.is_empty())
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.absolute_bounding_box.as_ref()
    }

    /// Uniform positive stroke weight.
    pub fn uniform_stroke_weight(&self) -> Option<f64> {
        probe(self.stroke_weight.as_ref(), |w| w.is_finite() && *w > 0.0).copied()
    }

    pub fn individual_stroke_weights(&self) -> Option<Edges> {
        self.individual_stroke_weights
    }

    pub fn stroke_dashes(&self) -> Option<&[f64]> {
        probe(self.stroke_dashes.as_deref(), |d| !d.is_empty())
    }

    /// Uniform positive corner radius.
    pub fn corner_radius(&self) -> Option<f64> {
        probe(self.corner_radius.as_ref(), |r| r.is_finite() && *r > 0.0).copied()
    }

    /// Four independent corner radii (top-left, top-right, bottom-right, bottom-left).
    pub fn corner_radii(&self) -> Option<Edges> {
        let r = probe(self.rectangle_corner_radii.as_deref(), |r| {
            r.len() == 4 && r.iter().all(|v| v.is_finite()) && r.iter().any(|v| *v != 0.0)
        })?;
        Some(Edges::new(r[0], r[1], r[2], r[3]))
    }

    /// Explicit opacity that differs from the implicit default of 1.
    pub fn non_default_opacity(&self) -> Option<f64> {
        probe(self.opacity.as_ref(), |o| o.is_finite() && *o != 1.0).copied()
    }

    /// Frame-like container view (auto-layout properties).
    pub fn frame(&self) -> Option<FrameView<'_>> {
        (self.clips_content.is_some() || self.layout_mode.is_some()).then_some(FrameView(self))
    }

    /// Per-child layout view (sizing/positioning inside a parent).
    pub fn child_layout(&self) -> Option<ChildLayoutView<'_>> {
        let present = self.absolute_bounding_box.is_some()
            || self.layout_sizing_horizontal.is_some()
            || self.layout_sizing_vertical.is_some()
            || self.layout_positioning.is_some()
            || self.layout_align.is_some()
            || self.layout_grow.is_some();
        present.then_some(ChildLayoutView(self))
    }

    pub fn is_absolute(&self) -> bool {
        self.layout_positioning == Some(LayoutPositioningDef::Absolute)
    }
}

/// Narrowed view of a frame-like container.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a>(&'a DesignNode);

impl<'a> FrameView<'a> {
    pub fn node(&self) -> &'a DesignNode {
        self.0
    }

    pub fn layout_mode(&self) -> Option<LayoutModeDef> {
        self.0.layout_mode
    }

    pub fn primary_align(&self) -> Option<AxisAlignDef> {
        self.0.primary_axis_align_items
    }

    pub fn counter_align(&self) -> Option<AxisAlignDef> {
        self.0.counter_axis_align_items
    }

    pub fn wraps(&self) -> bool {
        self.0.layout_wrap == Some(LayoutWrapDef::Wrap)
    }

    /// Nonzero item spacing.
    pub fn item_spacing(&self) -> Option<f64> {
        probe(self.0.item_spacing.as_ref(), |s| s.is_finite() && *s != 0.0).copied()
    }

    /// Padding with missing edges defaulted to zero; `None` when every edge is zero.
    pub fn padding(&self) -> Option<Edges> {
        let n = self.0;
        let edges = Edges::new(
            n.padding_top.unwrap_or(0.0),
            n.padding_right.unwrap_or(0.0),
            n.padding_bottom.unwrap_or(0.0),
            n.padding_left.unwrap_or(0.0),
        );
        (!edges.is_zero()).then_some(edges)
    }

    pub fn scrolls_x(&self) -> bool {
        matches!(
            self.0.overflow_direction,
            Some(
                OverflowDirectionDef::HorizontalScrolling
                    | OverflowDirectionDef::HorizontalAndVerticalScrolling
            )
        )
    }

    pub fn scrolls_y(&self) -> bool {
        matches!(
            self.0.overflow_direction,
            Some(
                OverflowDirectionDef::VerticalScrolling
                    | OverflowDirectionDef::HorizontalAndVerticalScrolling
            )
        )
    }

    pub fn self_align(&self) -> Option<LayoutAlignDef> {
        self.0.layout_align
    }
}

/// Narrowed view of a node's participation in its parent's layout.
#[derive(Clone, Copy, Debug)]
pub struct ChildLayoutView<'a>(&'a DesignNode);

impl<'a> ChildLayoutView<'a> {
    pub fn node(&self) -> &'a DesignNode {
        self.0
    }

    pub fn sizing_horizontal(&self) -> Option<LayoutSizingDef> {
        self.0.layout_sizing_horizontal
    }

    pub fn sizing_vertical(&self) -> Option<LayoutSizingDef> {
        self.0.layout_sizing_vertical
    }

    pub fn is_absolute(&self) -> bool {
        self.0.is_absolute()
    }

    /// Nonzero flex growth along the parent's main axis.
    pub fn grows(&self) -> bool {
        self.0.layout_grow.is_some_and(|g| g != 0.0)
    }

    pub fn stretches(&self) -> bool {
        self.0.layout_align == Some(LayoutAlignDef::Stretch)
    }

    pub fn preserves_ratio(&self) -> bool {
        self.0.preserve_ratio == Some(true)
    }

    pub fn bounding_box(&self) -> Option<&'a BoundingBox> {
        self.0.absolute_bounding_box.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/probe.rs"]
mod tests;
