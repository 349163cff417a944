use rstest::rstest;
use serde_json::{Value, json};

use super::*;

fn scene_object_minimal(id: &str) -> Value {
    json!({
        "id": id,
        "kind": "Layer",
        "version": "1.0.0",
        "data": { "visible": true },
        "displayName": "Layer",
        "order": 1,
        "parentId": "parent-1"
    })
}

fn scene_object(id: &str) -> Value {
    let mut value = scene_object_minimal(id);
    let object = value.as_object_mut().unwrap();
    object.insert("sceneId".to_string(), json!("scene-1"));
    object.insert("createdById".to_string(), json!("user-1"));
    object.insert("creationTime".to_string(), json!("2025-07-16T15:00:00.000Z"));
    object.insert("lastModified".to_string(), json!("2025-07-16T15:00:00.000Z"));
    value
}

fn scenario_a() -> Value {
    json!({
        "scene": {
            "id": "s1",
            "displayName": "Example Scene",
            "iTwinId": "itwin-1",
            "createdById": "user-1",
            "creationTime": "2025-07-16T15:00:00.000Z",
            "lastModified": "2025-07-16T15:00:00.000Z",
            "sceneData": {
                "objects": [{ "id": "obj-1", "kind": "MyKind", "version": "1.0.0", "data": {} }]
            }
        }
    })
}

fn paging_links() -> Value {
    json!({
        "self": { "href": "https://example.com/scenes/s1/objects?$top=2" },
        "next": { "href": "https://example.com/scenes/s1/objects?$top=2&$skip=2" }
    })
}

#[test]
fn test_scene_response_scenario_a() {
    assert!(is_scene_response(&scenario_a()));
}

#[test]
fn test_scene_response_missing_object_kind_scenario_b() {
    let mut value = scenario_a();
    value["scene"]["sceneData"]["objects"][0]
        .as_object_mut()
        .unwrap()
        .remove("kind");

    assert!(!is_scene_response(&value));
}

#[test]
fn test_empty_object_list_scenario_d() {
    assert!(is_scene_object_list_response(&json!({ "objects": [] })));
}

#[rstest]
#[case(json!(null))]
#[case(json!([]))]
#[case(json!([{ "id": "a", "kind": "Layer", "version": "1.0.0", "data": {} }]))]
#[case(json!("string"))]
#[case(json!(42))]
#[case(json!(true))]
fn test_guards_reject_non_objects(#[case] value: Value) {
    assert!(!is_scene_object_minimal(&value));
    assert!(!is_scene_object_create(&value));
    assert!(!is_scene_object(&value));
    assert!(!is_scene_minimal(&value));
    assert!(!is_scene(&value));
    assert!(!is_scene_data(&value));
    assert!(!is_link(&value));
    assert!(!is_paging_links(&value));
    assert!(!is_scene_response(&value));
    assert!(!is_scene_list_response(&value));
    assert!(!is_scene_object_response(&value));
    assert!(!is_scene_object_list_response(&value));
    assert!(!is_scene_object_paged_response(&value));
    assert!(!is_error_response(&value));
}

#[rstest]
#[case("displayName")]
#[case("order")]
#[case("parentId")]
fn test_optional_field_absent_passes_null_fails(#[case] field: &str) {
    let mut value = scene_object_minimal("obj-1");
    assert!(is_scene_object_minimal(&value));

    value.as_object_mut().unwrap().remove(field);
    assert!(is_scene_object_minimal(&value));

    value[field] = Value::Null;
    assert!(!is_scene_object_minimal(&value));
}

#[rstest]
#[case("displayName", json!(1))]
#[case("order", json!("1"))]
#[case("parentId", json!({}))]
#[case("relatedId", json!(["a"]))]
#[case("iTwinId", json!(false))]
fn test_optional_field_wrong_type_fails(#[case] field: &str, #[case] field_value: Value) {
    let mut value = scene_object_minimal("obj-1");
    value[field] = field_value;
    assert!(!is_scene_object_minimal(&value));
}

#[rstest]
#[case("id")]
#[case("kind")]
#[case("version")]
#[case("data")]
fn test_scene_object_minimal_required_fields(#[case] field: &str) {
    let mut value = scene_object_minimal("obj-1");
    value.as_object_mut().unwrap().remove(field);
    assert!(!is_scene_object_minimal(&value));
}

#[test]
fn test_data_must_be_a_plain_object() {
    let mut value = scene_object_minimal("obj-1");
    value["data"] = json!([1, 2]);
    assert!(!is_scene_object_minimal(&value));

    value["data"] = json!(null);
    assert!(!is_scene_object_minimal(&value));
}

#[test]
fn test_scene_object_create_does_not_require_id() {
    let value = json!({ "kind": "Layer", "version": "1.0.0", "data": {} });
    assert!(is_scene_object_create(&value));
    assert!(!is_scene_object_minimal(&value));

    let value = json!({ "id": 5, "kind": "Layer", "version": "1.0.0", "data": {} });
    assert!(!is_scene_object_create(&value));
}

#[rstest]
#[case("sceneId")]
#[case("createdById")]
#[case("creationTime")]
#[case("lastModified")]
fn test_scene_object_requires_server_fields(#[case] field: &str) {
    let mut value = scene_object("obj-1");
    assert!(is_scene_object(&value));

    value[field] = json!(1);
    assert!(!is_scene_object(&value));

    value.as_object_mut().unwrap().remove(field);
    assert!(!is_scene_object(&value));
}

#[rstest]
#[case(0)]
#[case(4)]
#[case(10)]
fn test_list_guard_rejects_single_invalid_element(#[case] position: usize) {
    let mut objects: Vec<Value> = (0..10)
        .map(|index| scene_object_minimal(&format!("obj-{index}")))
        .collect();
    assert!(is_scene_object_list_response(&json!({ "objects": objects })));

    objects.insert(position, json!({ "id": "broken", "version": "1.0.0", "data": {} }));
    assert!(!is_scene_object_list_response(&json!({ "objects": objects })));

    objects.remove(position);
    assert!(is_scene_object_list_response(&json!({ "objects": objects })));
}

#[test]
fn test_object_list_response_requires_array() {
    assert!(!is_scene_object_list_response(&json!({ "objects": {} })));
    assert!(!is_scene_object_list_response(&json!({})));
}

#[test]
fn test_full_object_list_response_requires_server_fields() {
    assert!(is_scene_object_full_list_response(
        &json!({ "objects": [scene_object("a"), scene_object("b")] })
    ));
    assert!(is_scene_object_full_list_response(&json!({ "objects": [] })));
    assert!(!is_scene_object_full_list_response(
        &json!({ "objects": [scene_object("a"), scene_object_minimal("b")] })
    ));
}

#[test]
fn test_paged_object_response() {
    let value = json!({
        "objects": [scene_object("obj-1"), scene_object("obj-2")],
        "_links": paging_links()
    });
    assert!(is_scene_object_paged_response(&value));

    let without_links = json!({ "objects": [scene_object("obj-1")] });
    assert!(!is_scene_object_paged_response(&without_links));

    let minimal_objects = json!({
        "objects": [scene_object_minimal("obj-1")],
        "_links": paging_links()
    });
    assert!(!is_scene_object_paged_response(&minimal_objects));
}

#[test]
fn test_paging_links() {
    assert!(is_paging_links(&json!({ "self": { "href": "a" } })));
    assert!(is_paging_links(&paging_links()));
    assert!(!is_paging_links(&json!({ "next": { "href": "b" } })));
    assert!(!is_paging_links(&json!({ "self": { "href": "a" }, "next": null })));
    assert!(!is_paging_links(&json!({ "self": { "href": 1 } })));
    assert!(!is_link(&json!({})));
}

#[test]
fn test_scene_list_response() {
    let mut scene = scenario_a()["scene"].clone();
    scene.as_object_mut().unwrap().remove("sceneData");

    assert!(is_scene_minimal(&scene));
    assert!(!is_scene(&scene));
    assert!(is_scene_list_response(&json!({ "scenes": [scene.clone()] })));
    assert!(is_scene_list_response(
        &json!({ "scenes": [scene.clone()], "_links": paging_links() })
    ));
    assert!(!is_scene_list_response(
        &json!({ "scenes": [scene], "_links": { "next": { "href": "x" } } })
    ));
    assert!(!is_scene_list_response(&json!({ "scenes": [{ "id": "s2" }] })));
}

#[test]
fn test_scene_minimal_fields_are_subset_of_scene() {
    let scene = scenario_a()["scene"].clone();
    assert!(is_scene(&scene));
    assert!(is_scene_minimal(&scene));
}

#[test]
fn test_scene_data_rejects_null_objects() {
    assert!(is_scene_data(&json!({ "objects": [] })));
    assert!(!is_scene_data(&json!({ "objects": null })));
    assert!(!is_scene_data(&json!({ "objects": [null] })));
}

#[test]
fn test_category_field_is_not_cross_checked() {
    let value = json!({
        "id": "obj-1",
        "kind": "ExpressionStyling",
        "version": "1.0.0",
        "data": {}
    });
    assert!(is_scene_object_minimal(&value));
}

#[test]
fn test_error_response() {
    assert!(is_error_response(&json!({
        "error": { "code": "SceneNotFound", "message": "not found", "target": "scene" }
    })));
    assert!(is_error_response(&json!({
        "error": {
            "code": "InvalidSceneRequest",
            "message": "invalid",
            "details": [{ "code": "InvalidValue", "message": "displayName" }]
        }
    })));
    assert!(!is_error_response(&json!({ "error": { "code": "X" } })));
    assert!(!is_error_response(&json!({
        "error": { "code": "X", "message": "m", "details": [{ "code": "Y" }] }
    })));
    assert!(!is_error_response(&json!({ "code": "X", "message": "m" })));
}

#[test]
fn test_serialized_create_payload_is_recognized() {
    let payload = crate::schema::build_create_payload(
        "Layer",
        "1.0.0",
        json!({ "visible": false }),
        Default::default(),
    )
    .unwrap()
    .with_display_name("Layer")
    .with_order(3.5);

    let encoded = serde_json::to_string(&payload).unwrap();
    let decoded: Value = serde_json::from_str(&encoded).unwrap();
    assert!(is_scene_object_create(&decoded));
}
