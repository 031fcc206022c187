use super::*;
use serde_json::json;

fn minimal() -> serde_json::Value {
    json!({
        "title": "t",
        "sections": [
            { "blocks": [ { "text": "Hot", "role": "heading", "size_px": 64.0 } ] },
            { "canvases": [
                { "startIndex": 0, "numImages": 10, "duration": 1.5, "size": 100.0, "top": 10.0, "left": 20.0, "zIndex": 2 }
            ] },
            {}
        ]
    })
}

#[test]
fn default_page_is_valid() {
    let cfg = PageConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas_counts(), [6, 4, 3]);
}

#[test]
fn parses_original_canvas_field_names() {
    let cfg: PageConfig = serde_json::from_value(minimal()).unwrap();
    cfg.validate().unwrap();
    let c = cfg.sections[1].canvases[0];
    assert_eq!(c.num_images, 10);
    assert_eq!(c.z_index, 2);
    assert_eq!(cfg.sections[0].blocks[0].role, BlockRole::Heading);
    assert!(!cfg.sections[0].blocks[0].animatable);
    assert_eq!(cfg.canvas_counts(), [0, 1, 0]);
}

#[test]
fn requires_three_sections() {
    let mut v = minimal();
    v["sections"].as_array_mut().unwrap().pop();
    let err = PageConfig::from_json_str(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains("exactly 3 sections"));
}

#[test]
fn requires_single_heading() {
    let mut v = minimal();
    v["sections"][2]["blocks"] = json!([{ "text": "again", "role": "heading" }]);
    assert!(PageConfig::from_json_str(&v.to_string()).is_err());

    let mut v = minimal();
    v["sections"][0]["blocks"][0]["role"] = json!("body");
    assert!(PageConfig::from_json_str(&v.to_string()).is_err());
}

#[test]
fn rejects_bad_canvas_fields() {
    let mut v = minimal();
    v["sections"][1]["canvases"][0]["numImages"] = json!(0);
    let err = PageConfig::from_json_str(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains("section 1 canvas 0"));

    let mut v = minimal();
    v["sections"][1]["canvases"][0]["duration"] = json!(0.0);
    assert!(PageConfig::from_json_str(&v.to_string()).is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, ChiliError::Serde(_)));
}
