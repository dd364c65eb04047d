use super::*;
use serde_json::json;

fn response(v: serde_json::Value) -> DesignResponse {
    serde_json::from_value(v).unwrap()
}

fn doc(children: serde_json::Value) -> DesignResponse {
    response(json!({
        "name": "File",
        "lastModified": "2024-05-01T10:00:00Z",
        "thumbnailUrl": "https://example.invalid/thumb.png",
        "document": {"id": "0:0", "name": "Document", "type": "DOCUMENT", "children": children}
    }))
}

fn red() -> serde_json::Value {
    json!([{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}])
}

#[test]
fn vector_nodes_are_retagged() {
    let d = simplify(&doc(json!([{"id": "1", "name": "icon", "type": "VECTOR"}]))).unwrap();
    assert_eq!(d.nodes.len(), 1);
    assert_eq!(d.nodes[0].node_type, VECTOR_IMAGE_TYPE);
}

#[test]
fn corner_radius_uniform_and_per_corner() {
    let d = simplify(&doc(json!([
        {"id": "1", "name": "a", "type": "RECTANGLE", "cornerRadius": 8},
        {"id": "2", "name": "b", "type": "RECTANGLE", "rectangleCornerRadii": [1, 2, 3, 4]},
        {"id": "3", "name": "c", "type": "RECTANGLE", "cornerRadius": 6,
         "rectangleCornerRadii": [1, 2, 3, 4]}
    ])))
    .unwrap();
    assert_eq!(d.nodes[0].border_radius.as_deref(), Some("8px"));
    assert_eq!(d.nodes[1].border_radius.as_deref(), Some("1px 2px 3px 4px"));
    assert_eq!(d.nodes[2].border_radius.as_deref(), Some("6px"));
}

#[test]
fn invisible_subtrees_are_pruned_entirely() {
    let d = simplify(&doc(json!([
        {"id": "1", "name": "page", "type": "CANVAS", "children": [
            {"id": "2", "name": "hidden", "type": "FRAME", "visible": false, "children": [
                {"id": "3", "name": "shown", "type": "TEXT", "visible": true, "characters": "hi"}
            ]},
            {"id": "4", "name": "kept", "type": "RECTANGLE"}
        ]},
        {"id": "5", "name": "hidden root", "type": "CANVAS", "visible": false}
    ])))
    .unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert!(!json.contains("hidden"));
    assert!(!json.contains("shown"));
    assert_eq!(d.nodes.len(), 1);
    let children = d.nodes[0].children.as_ref().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, "4");
}

#[test]
fn equal_fills_dedup_across_nodes() {
    let d = simplify(&doc(json!([
        {"id": "1", "name": "a", "type": "RECTANGLE", "fills": red()},
        {"id": "2", "name": "b", "type": "RECTANGLE", "fills": red()},
        {"id": "3", "name": "c", "type": "RECTANGLE",
         "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1}}]}
    ])))
    .unwrap();
    assert_eq!(d.nodes[0].fills, d.nodes[1].fills);
    assert_ne!(d.nodes[0].fills, d.nodes[2].fills);
    assert_eq!(d.global_vars.len(), 2);
}

#[test]
fn text_opacity_and_styles_are_attached() {
    let d = simplify(&doc(json!([{
        "id": "1", "name": "label", "type": "TEXT",
        "characters": "Hello",
        "opacity": 0.5,
        "style": {"fontFamily": "Inter", "fontSize": 14, "lineHeightPx": 21},
        "fills": red(),
        "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}],
        "strokeWeight": 1,
        "effects": [{"type": "LAYER_BLUR", "radius": 3}]
    }])))
    .unwrap();
    let n = &d.nodes[0];
    assert_eq!(n.text.as_deref(), Some("Hello"));
    assert_eq!(n.opacity, Some(0.5));
    assert_eq!(n.text_style.as_ref().map(|s| s.as_str()), Some("style_1"));
    assert_eq!(n.fills.as_ref().map(|s| s.as_str()), Some("fill_1"));
    assert_eq!(n.strokes.as_ref().map(|s| s.as_str()), Some("stroke_1"));
    assert_eq!(n.effects.as_ref().map(|s| s.as_str()), Some("effect_1"));
    assert!(n.layout.is_none());
}

#[test]
fn default_values_are_omitted() {
    let d = simplify(&doc(json!([{
        "id": "1", "name": "plain", "type": "FRAME",
        "opacity": 1, "fills": [], "strokes": [], "effects": [], "characters": "",
        "style": {}, "children": [], "strokeWeight": 2, "clipsContent": true,
        "layoutMode": "HORIZONTAL"
    }])))
    .unwrap();
    let v = serde_json::to_value(&d.nodes[0]).unwrap();
    assert_eq!(v, json!({"id": "1", "name": "plain", "type": "FRAME"}));
    assert!(d.global_vars.is_empty());
}

#[test]
fn layout_dimensions_follow_each_nodes_own_mode() {
    let d = simplify(&doc(json!([{
        "id": "p", "name": "row", "type": "FRAME", "layoutMode": "HORIZONTAL",
        "itemSpacing": 8,
        "absoluteBoundingBox": {"x": 0, "y": 0, "width": 200, "height": 100},
        "children": [
            {
                "id": "c", "name": "stack", "type": "FRAME", "layoutMode": "VERTICAL",
                "layoutSizingHorizontal": "FIXED", "layoutSizingVertical": "FIXED",
                "layoutGrow": 1, "preserveRatio": true,
                "absoluteBoundingBox": {"x": 0, "y": 0, "width": 100, "height": 50}
            },
            {
                "id": "r", "name": "swatch", "type": "RECTANGLE",
                "layoutSizingHorizontal": "FIXED", "layoutSizingVertical": "FIXED",
                "absoluteBoundingBox": {"x": 110, "y": 0, "width": 10, "height": 10}
            },
            {
                "id": "b", "name": "badge", "type": "RECTANGLE",
                "layoutPositioning": "ABSOLUTE",
                "absoluteBoundingBox": {"x": 20, "y": 30, "width": 10, "height": 10}
            }
        ]
    }])))
    .unwrap();
    let layout = |n: &SimplifiedNode| {
        serde_json::to_value(d.global_vars.get(n.layout.as_ref().unwrap()).unwrap()).unwrap()
    };
    let parent = &d.nodes[0];
    let [stack, swatch, badge] = parent.children.as_deref().unwrap() else {
        panic!("expected three children");
    };

    assert_eq!(layout(parent), json!({"mode": "row", "gap": "8px"}));
    assert_eq!(
        layout(stack),
        json!({
            "mode": "column",
            "dimensions": {"width": 100.0, "aspectRatio": 2.0},
            "sizing": {"horizontal": "fixed", "vertical": "fixed"}
        })
    );
    assert_eq!(
        layout(swatch),
        json!({"mode": "none", "sizing": {"horizontal": "fixed", "vertical": "fixed"}})
    );
    assert_eq!(
        layout(badge),
        json!({
            "mode": "none",
            "locationRelativeToParent": {"x": 20.0, "y": 30.0},
            "position": "absolute"
        })
    );
}

#[test]
fn nodes_map_roots_follow_response_order_and_nulls_skipped() {
    let json = r#"{
        "name": "File",
        "lastModified": "t",
        "nodes": {
            "2:1": {"document": {"id": "2:1", "name": "second", "type": "FRAME",
                                 "fills": [{"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0}}]}},
            "10:1": {"document": {"id": "10:1", "name": "tenth", "type": "FRAME",
                                  "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1}}]}},
            "3:3": null
        }
    }"#;
    let d = simplify_json(json, &SimplifyOptions::default()).unwrap();
    let ids: Vec<_> = d.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["2:1", "10:1"]);
    // Ids are allocated in walk order, so the first root owns fill_1.
    assert_eq!(d.nodes[0].fills.as_ref().map(|s| s.as_str()), Some("fill_1"));
    assert_eq!(d.nodes[1].fills.as_ref().map(|s| s.as_str()), Some("fill_2"));
    assert_eq!(d.thumbnail_url, "");
}

#[test]
fn missing_roots_is_a_structure_error() {
    let err = simplify(&response(json!({"name": "File"}))).unwrap_err();
    assert!(matches!(err, SimplifyError::Structure(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = simplify_json("{\"document\": 3}", &SimplifyOptions::default()).unwrap_err();
    assert!(matches!(err, SimplifyError::Serde(_)));
}

#[test]
fn max_depth_stops_descent() {
    let r = doc(json!([{
        "id": "1", "name": "a", "type": "CANVAS", "children": [
            {"id": "2", "name": "b", "type": "FRAME", "children": [
                {"id": "3", "name": "c", "type": "RECTANGLE"}
            ]}
        ]
    }]));
    let d = simplify_with(&r, &SimplifyOptions { max_depth: Some(1) }).unwrap();
    let b = &d.nodes[0].children.as_ref().unwrap()[0];
    assert_eq!(b.id, "2");
    assert!(b.children.is_none());

    let d = simplify_with(&r, &SimplifyOptions { max_depth: Some(0) }).unwrap();
    assert!(d.nodes[0].children.is_none());
}

#[test]
fn simplify_is_deterministic_with_fresh_stores() {
    let r = doc(json!([
        {"id": "1", "name": "a", "type": "FRAME", "layoutMode": "VERTICAL", "paddingTop": 4,
         "fills": red(), "children": [
            {"id": "2", "name": "b", "type": "TEXT", "characters": "x",
             "style": {"fontSize": 12}, "fills": red()}
        ]}
    ]));
    let a = simplify(&r).unwrap().to_json().unwrap();
    let b = simplify(&r).unwrap().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn fully_empty_records_are_dropped() {
    let (nodes, vars) = simplify_tree(
        [&DesignNode::default()],
        &SimplifyOptions::default(),
    )
    .unwrap();
    assert!(nodes.is_empty());
    assert!(vars.is_empty());
}
