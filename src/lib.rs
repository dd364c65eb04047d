//! Design-tree simplification for code generation.
//!
//! Turns a fetched design-file response (a deep tree of nodes carrying sparse, optional trait
//! groups) into a compact intermediate representation:
//!
//! 1. **Probe**: optional trait groups are tested through capability probes on [`DesignNode`].
//! 2. **Resolve**: fills, strokes, effects and text styles become canonical values.
//! 3. **Translate**: auto-layout and constraint properties become flexbox-style
//!    [`SimplifiedLayout`].
//! 4. **Deduplicate**: every canonical value is stored once in a per-call [`StyleStore`]; nodes
//!    carry [`StyleId`] references instead of inline values.
//!
//! The engine is synchronous, performs no IO and never mutates its input. Each call owns its own
//! style store, so concurrent calls over independent files never share ids.
//!
//! ```no_run
//! let json = std::fs::read_to_string("file.json")?;
//! let design = figma_simplify::simplify_json(&json, &Default::default())?;
//! println!("{}", design.to_json_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod normalize;
mod scene;
mod style;

pub use foundation::core::{Edges, Point, Rect, Vec2, px};
pub use foundation::error::{SimplifyError, SimplifyResult};
pub use layout::translate::{
    Alignment, Dimensions, FlowMode, Position, ScrollAxis, SimplifiedLayout, Sizing, SizingPair,
    build_layout, flow_mode,
};
pub use normalize::ir::{
    GlobalVars, SimplifiedDesign, SimplifiedNode, StyleCategory, StyleId, StyleValue,
    VECTOR_IMAGE_TYPE,
};
pub use normalize::pass::{SimplifyOptions, simplify, simplify_json, simplify_tree, simplify_with};
pub use normalize::store::StyleStore;
pub use scene::model::{
    AxisAlignDef, BoundingBox, ColorDef, ColorStopDef, DesignNode, DesignResponse, Effect,
    EffectKind, LayoutAlignDef, LayoutModeDef, LayoutPositioningDef, LayoutSizingDef,
    LayoutWrapDef, NodeEntry, NodeMap, OverflowDirectionDef, Paint, PaintKind, ScaleModeDef,
    TypeStyle,
};
pub use scene::probe::{ChildLayoutView, FrameView};
pub use style::effects::{SimplifiedEffects, build_effects};
pub use style::paint::{
    ColorValue, GradientStop, SimplifiedFill, color_value, hex, resolve_paint, resolve_paints,
    rgba_css,
};
pub use style::stroke::{SimplifiedStroke, build_strokes};
pub use style::text::{SimplifiedTextStyle, build_text_style};
