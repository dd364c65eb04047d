//! Auto-layout to flexbox translation.
//!
//! Two passes feed one [`SimplifiedLayout`]:
//!
//! 1. **Frame pass**: a frame-like container's own flow, alignment, wrap, gap and padding.
//! 2. **Child pass**: how the node sits inside its parent: sizing, absolute placement, or the
//!    explicit dimensions flex growth/stretch will not determine. The parent's flow decides
//!    between placement and flow; dimensions follow the mode the frame pass produced.
//!
//! Child-pass fields are applied on top of frame-pass fields.

use crate::foundation::core::{Vec2, px};
use crate::foundation::math::finite_ratio;
use crate::scene::model::{
    AxisAlignDef, DesignNode, LayoutAlignDef, LayoutModeDef, LayoutSizingDef,
};
use crate::scene::probe::{ChildLayoutView, FrameView};
use serde::Serialize;
use smallvec::SmallVec;

/// Flex flow direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMode {
    Row,
    Column,
    #[default]
    None,
}

/// CSS alignment keyword. `flex-start` is never emitted; it is the implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    FlexEnd,
    Center,
    SpaceBetween,
    Baseline,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
    Fixed,
    Fill,
    Hug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Absolute,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SizingPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<Sizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<Sizing>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl Dimensions {
    fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.aspect_ratio.is_none()
    }
}

/// Normalized layout description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedLayout {
    pub mode: FlowMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_relative_to_parent: Option<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<SizingPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_scroll: Option<SmallVec<[ScrollAxis; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl SimplifiedLayout {
    /// `true` when the record carries anything beyond its flow mode.
    pub fn is_informative(&self) -> bool {
        *self
            != Self {
                mode: self.mode,
                ..Self::default()
            }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Primary,
    Counter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Horizontal,
    Vertical,
}

/// Geometric direction of a flex axis.
fn direction(axis: Axis, mode: FlowMode) -> Option<Direction> {
    match (axis, mode) {
        (Axis::Primary, FlowMode::Row) | (Axis::Counter, FlowMode::Column) => {
            Some(Direction::Horizontal)
        }
        (Axis::Primary, FlowMode::Column) | (Axis::Counter, FlowMode::Row) => {
            Some(Direction::Vertical)
        }
        (_, FlowMode::None) => None,
    }
}

/// Flow mode a node establishes for its own children.
pub fn flow_mode(node: &DesignNode) -> FlowMode {
    node.frame()
        .map(|f| match f.layout_mode() {
            Some(LayoutModeDef::Horizontal) => FlowMode::Row,
            Some(LayoutModeDef::Vertical) => FlowMode::Column,
            _ => FlowMode::None,
        })
        .unwrap_or_default()
}

pub fn build_layout(node: &DesignNode, parent: Option<&DesignNode>) -> SimplifiedLayout {
    let mut layout = match node.frame() {
        Some(frame) => frame_values(frame),
        None => SimplifiedLayout::default(),
    };
    if let Some(view) = node.child_layout() {
        apply_child_values(&mut layout, view, parent);
    }
    layout
}

fn frame_values(frame: FrameView<'_>) -> SimplifiedLayout {
    let mode = flow_mode(frame.node());
    let mut layout = SimplifiedLayout {
        mode,
        ..SimplifiedLayout::default()
    };

    let mut scroll = SmallVec::<[ScrollAxis; 2]>::new();
    if frame.scrolls_x() {
        scroll.push(ScrollAxis::X);
    }
    if frame.scrolls_y() {
        scroll.push(ScrollAxis::Y);
    }
    if !scroll.is_empty() {
        layout.overflow_scroll = Some(scroll);
    }

    if mode == FlowMode::None {
        return layout;
    }

    // Hidden children still count toward the stretch test.
    let children: Vec<&DesignNode> = frame.node().children().unwrap_or(&[]).iter().collect();
    layout.justify_content = convert_align(
        frame.primary_align().unwrap_or(AxisAlignDef::Min),
        Axis::Primary,
        mode,
        &children,
    );
    layout.align_items = convert_align(
        frame.counter_align().unwrap_or(AxisAlignDef::Min),
        Axis::Counter,
        mode,
        &children,
    );
    layout.align_self = frame.self_align().and_then(convert_self_align);
    layout.wrap = frame.wraps().then_some(true);
    layout.gap = frame.item_spacing().map(px);
    layout.padding = frame.padding().map(|p| p.css_shorthand());
    layout
}

fn convert_align(
    align: AxisAlignDef,
    axis: Axis,
    mode: FlowMode,
    children: &[&DesignNode],
) -> Option<Alignment> {
    // `justify-content` has no stretch in flexbox; main-axis fill is carried by child sizing.
    if axis == Axis::Counter
        && let Some(dir) = direction(axis, mode)
        && children_fill(children, dir)
    {
        return Some(Alignment::Stretch);
    }

    match (align, axis) {
        (AxisAlignDef::Max, _) => Some(Alignment::FlexEnd),
        (AxisAlignDef::Center, _) => Some(Alignment::Center),
        (AxisAlignDef::SpaceBetween, Axis::Primary) => Some(Alignment::SpaceBetween),
        (AxisAlignDef::Baseline, Axis::Counter) => Some(Alignment::Baseline),
        _ => None,
    }
}

/// Every child is out of flow or fills `dir`; requires at least one child.
fn children_fill(children: &[&DesignNode], dir: Direction) -> bool {
    !children.is_empty()
        && children.iter().all(|c| {
            if c.is_absolute() {
                return true;
            }
            let sizing = match dir {
                Direction::Horizontal => c.layout_sizing_horizontal,
                Direction::Vertical => c.layout_sizing_vertical,
            };
            sizing == Some(LayoutSizingDef::Fill)
        })
}

fn convert_self_align(align: LayoutAlignDef) -> Option<Alignment> {
    match align {
        LayoutAlignDef::Max => Some(Alignment::FlexEnd),
        LayoutAlignDef::Center => Some(Alignment::Center),
        LayoutAlignDef::Stretch => Some(Alignment::Stretch),
        _ => None,
    }
}

fn convert_sizing(s: Option<LayoutSizingDef>) -> Option<Sizing> {
    match s? {
        LayoutSizingDef::Fixed => Some(Sizing::Fixed),
        LayoutSizingDef::Fill => Some(Sizing::Fill),
        LayoutSizingDef::Hug => Some(Sizing::Hug),
        LayoutSizingDef::Unknown => None,
    }
}

fn apply_child_values(
    layout: &mut SimplifiedLayout,
    view: ChildLayoutView<'_>,
    parent: Option<&DesignNode>,
) {
    let sizing = SizingPair {
        horizontal: convert_sizing(view.sizing_horizontal()),
        vertical: convert_sizing(view.sizing_vertical()),
    };
    if sizing != SizingPair::default() {
        layout.sizing = Some(sizing);
    }

    let parent_mode = parent.map(flow_mode).unwrap_or_default();

    // Out of flex flow: placement only, no dimensions.
    if parent_mode == FlowMode::None || view.is_absolute() {
        if view.is_absolute() {
            layout.position = Some(Position::Absolute);
        }
        if let (Some(bb), Some(pbb)) = (view.bounding_box(), parent.and_then(|p| p.bounding_box()))
        {
            layout.location_relative_to_parent = Some(bb.origin() - pbb.origin());
        }
        return;
    }

    let Some(bb) = view.bounding_box() else {
        return;
    };
    if parent.and_then(|p| p.bounding_box()).is_none() {
        return;
    }
    let fixed_h = view.sizing_horizontal() == Some(LayoutSizingDef::Fixed);
    let fixed_v = view.sizing_vertical() == Some(LayoutSizingDef::Fixed);

    // Keyed off the node's own flow mode; plain leaves (mode `none`) carry no dimensions.
    let mut dims = Dimensions::default();
    match layout.mode {
        FlowMode::Row => {
            if !view.grows() && fixed_h {
                dims.width = Some(bb.width);
            }
            if !view.stretches() && fixed_v {
                dims.height = Some(bb.height);
            }
        }
        FlowMode::Column => {
            if !view.stretches() && fixed_h {
                dims.width = Some(bb.width);
            }
            if !view.grows() && fixed_v {
                dims.height = Some(bb.height);
            }
            if view.preserves_ratio() {
                dims.aspect_ratio = finite_ratio(bb.width, bb.height);
            }
        }
        FlowMode::None => {}
    }
    if !dims.is_empty() {
        layout.dimensions = Some(dims);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/translate.rs"]
mod tests;
