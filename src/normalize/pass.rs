use crate::foundation::core::px;
use crate::foundation::error::{SimplifyError, SimplifyResult};
use crate::layout::translate::build_layout;
use crate::normalize::ir::{
    GlobalVars, SimplifiedDesign, SimplifiedNode, StyleValue, VECTOR_IMAGE_TYPE,
};
use crate::normalize::store::StyleStore;
use crate::scene::model::{DesignNode, DesignResponse};
use crate::style::effects::build_effects;
use crate::style::paint::resolve_paints;
use crate::style::stroke::build_strokes;
use crate::style::text::build_text_style;

/// Knobs for one simplification call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimplifyOptions {
    /// Maximum depth to descend below the roots (roots are depth 0). `None` walks everything.
    pub max_depth: Option<usize>,
}

/// Simplify a fetched design response with default options.
pub fn simplify(response: &DesignResponse) -> SimplifyResult<SimplifiedDesign> {
    simplify_with(response, &SimplifyOptions::default())
}

/// Decode a JSON response and simplify it.
pub fn simplify_json(json: &str, opts: &SimplifyOptions) -> SimplifyResult<SimplifiedDesign> {
    simplify_with(&DesignResponse::from_json_str(json)?, opts)
}

#[tracing::instrument(skip_all, fields(file = %response.name))]
pub fn simplify_with(
    response: &DesignResponse,
    opts: &SimplifyOptions,
) -> SimplifyResult<SimplifiedDesign> {
    let roots = root_nodes(response)?;
    let (nodes, global_vars) = simplify_tree(roots, opts)?;

    tracing::debug!(
        nodes = nodes.iter().map(SimplifiedNode::subtree_len).sum::<usize>(),
        styles = global_vars.len(),
        "simplified design"
    );

    Ok(SimplifiedDesign {
        name: response.name.clone(),
        last_modified: response.last_modified.clone(),
        thumbnail_url: response.thumbnail_url.clone().unwrap_or_default(),
        nodes,
        global_vars,
    })
}

/// Simplify a root node list with a fresh style store.
pub fn simplify_tree<'a>(
    roots: impl IntoIterator<Item = &'a DesignNode>,
    opts: &SimplifyOptions,
) -> SimplifyResult<(Vec<SimplifiedNode>, GlobalVars)> {
    let mut store = StyleStore::new();
    let mut nodes = Vec::new();
    for root in roots.into_iter().filter(|n| n.is_visible()) {
        if let Some(n) = simplify_node(&mut store, root, None, 0, opts)? {
            nodes.push(n);
        }
    }
    Ok((nodes, store.into_vars()))
}

fn root_nodes(response: &DesignResponse) -> SimplifyResult<Vec<&DesignNode>> {
    if let Some(document) = response.document.as_ref() {
        return Ok(document.children.iter().flatten().collect());
    }
    if let Some(nodes) = response.nodes.as_ref() {
        return Ok(nodes.values().flatten().map(|e| &e.document).collect());
    }
    Err(SimplifyError::structure(
        "response has neither a document root nor a nodes map",
    ))
}

fn simplify_node(
    store: &mut StyleStore,
    node: &DesignNode,
    parent: Option<&DesignNode>,
    depth: usize,
    opts: &SimplifyOptions,
) -> SimplifyResult<Option<SimplifiedNode>> {
    let mut out = SimplifiedNode {
        id: node.id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        ..SimplifiedNode::default()
    };

    if let Some(style) = node.text_style() {
        let text_style = build_text_style(style);
        if !text_style.is_empty() {
            out.text_style = Some(store.resolve(StyleValue::TextStyle(text_style))?);
        }
    }

    if let Some(fills) = node.fills() {
        out.fills = Some(store.resolve(StyleValue::Fills(resolve_paints(fills)))?);
    }

    let strokes = build_strokes(node);
    if !strokes.is_empty() {
        out.strokes = Some(store.resolve(StyleValue::Stroke(strokes))?);
    }

    let effects = build_effects(node);
    if !effects.is_empty() {
        out.effects = Some(store.resolve(StyleValue::Effects(effects))?);
    }

    let layout = build_layout(node, parent);
    if layout.is_informative() {
        out.layout = Some(store.resolve(StyleValue::Layout(layout))?);
    }

    out.text = node.characters().map(str::to_owned);
    out.opacity = node.non_default_opacity();
    out.border_radius = node
        .corner_radius()
        .map(px)
        .or_else(|| node.corner_radii().map(|r| r.css_shorthand()));

    if opts.max_depth.is_none_or(|max| depth < max) {
        let mut children = Vec::new();
        for child in node.visible_children() {
            if let Some(c) = simplify_node(store, child, Some(node), depth + 1, opts)? {
                children.push(c);
            }
        }
        if !children.is_empty() {
            out.children = Some(children);
        }
    }

    if node.node_type == "VECTOR" {
        out.node_type = VECTOR_IMAGE_TYPE.to_string();
    }

    Ok((!out.is_empty()).then_some(out))
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/pass.rs"]
mod tests;
