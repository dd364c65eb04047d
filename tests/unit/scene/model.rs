use super::*;
use serde_json::json;

#[test]
fn minimal_node_decodes_with_all_traits_absent() {
    let n: DesignNode =
        serde_json::from_value(json!({"id": "1:2", "name": "Box", "type": "RECTANGLE"})).unwrap();
    assert_eq!(n.node_type, "RECTANGLE");
    assert!(n.fills.is_none());
    assert!(n.children.is_none());
    assert!(n.layout_mode.is_none());
}

#[test]
fn unknown_enum_values_decode_as_unknown() {
    let n: DesignNode = serde_json::from_value(json!({
        "id": "1",
        "name": "n",
        "type": "FRAME",
        "layoutMode": "GRID",
        "layoutSizingHorizontal": "SOMETHING_NEW",
        "fills": [{"type": "HOLOGRAM"}]
    }))
    .unwrap();
    assert_eq!(n.layout_mode, Some(LayoutModeDef::Unknown));
    assert_eq!(n.layout_sizing_horizontal, Some(LayoutSizingDef::Unknown));
    assert_eq!(n.fills.unwrap()[0].kind, PaintKind::Unknown);
}

#[test]
fn color_alpha_defaults_to_one() {
    let c: ColorDef = serde_json::from_value(json!({"r": 1, "g": 0, "b": 0})).unwrap();
    assert_eq!(c.a, 1.0);
}

#[test]
fn bounding_box_rect_spans_origin_and_size() {
    let bb = BoundingBox {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
    };
    let r = bb.rect();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (10.0, 20.0, 40.0, 60.0));
}

#[test]
fn nodes_response_allows_null_entries() {
    let resp: DesignResponse = serde_json::from_value(json!({
        "name": "File",
        "lastModified": "2024-01-01T00:00:00Z",
        "nodes": {
            "1:2": {"document": {"id": "1:2", "name": "A", "type": "FRAME"}},
            "9:9": null
        }
    }))
    .unwrap();
    let nodes = resp.nodes.unwrap();
    assert!(nodes.get("1:2").unwrap().is_some());
    assert!(nodes.get("9:9").unwrap().is_none());
    assert!(nodes.get("0:0").is_none());
    assert!(resp.thumbnail_url.is_none());
}

#[test]
fn response_decoders_agree_and_tag_serde_errors() {
    let v = json!({"name": "File", "document": {"id": "0:0", "name": "Doc", "type": "DOCUMENT"}});
    let a = DesignResponse::from_json_value(v.clone()).unwrap();
    let b = DesignResponse::from_json_str(&v.to_string()).unwrap();
    let c = DesignResponse::from_reader(v.to_string().as_bytes()).unwrap();
    for r in [&a, &b, &c] {
        assert_eq!(r.name, "File");
        assert_eq!(r.document.as_ref().unwrap().node_type, "DOCUMENT");
    }

    let err = DesignResponse::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, SimplifyError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error: parse design response JSON"));
}

#[test]
fn nodes_map_keeps_response_key_order() {
    let json = r#"{"nodes": {
        "2:1": {"document": {"id": "2:1", "type": "FRAME"}},
        "10:1": {"document": {"id": "10:1", "type": "FRAME"}},
        "1:5": null
    }}"#;
    let resp = DesignResponse::from_json_str(json).unwrap();
    let nodes = resp.nodes.as_ref().unwrap();
    assert_eq!(nodes.keys().collect::<Vec<_>>(), ["2:1", "10:1", "1:5"]);
    assert_eq!(nodes.len(), 3);

    let back = serde_json::to_string(&resp.nodes).unwrap();
    assert!(back.find("\"2:1\"").unwrap() < back.find("\"10:1\"").unwrap());
}
