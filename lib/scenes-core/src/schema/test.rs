use std::collections::HashSet;

use rstest::rstest;
use serde_json::{Value, json};
use shared_types::{ITwinId, SceneObjectId};
use similar_asserts::assert_eq;
use strum::IntoEnumIterator;

use super::*;

fn sample_data(kind: SchemaKind) -> Value {
    match kind {
        SchemaKind::Layer => json!({ "visible": true, "description": "Piping" }),
        SchemaKind::View3d => json!({
            "position": { "x": 10.0, "y": 20.0, "z": 30.0 },
            "direction": { "x": 0.0, "y": 1.0, "z": 0.0 },
            "up": { "x": 0.0, "y": 0.0, "z": 1.0 },
            "aspectRatio": 1.5,
            "isOrthographic": false
        }),
        SchemaKind::RepositoryResource => json!({
            "id": "imodel-1",
            "class": "iModels",
            "repositoryId": "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        }),
        SchemaKind::ExpressionStyling => json!({
            "show": "${Height} > 10",
            "defines": { "Height": "${feature['height']}" }
        }),
        SchemaKind::IModelVisibility => json!({
            "categories": { "hiddenList": ["0x20000000001"] },
            "elements": { "shownList": ["0x1", "0xa"] }
        }),
        SchemaKind::ScheduleSimulation => json!({
            "timelineId": "0x2a",
            "timePoint": 1_700_000_000.0,
            "isLooping": true
        }),
        SchemaKind::CameraAnimation => json!({
            "keyframes": [{
                "time": 0.0,
                "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "direction": { "x": 1.0, "y": 0.0, "z": 0.0 },
                "up": { "x": 0.0, "y": 0.0, "z": 1.0 }
            }],
            "interpolation": "Spline"
        }),
        SchemaKind::Cutout => json!({
            "planes": [{ "normal": { "x": 0.0, "y": 0.0, "z": 1.0 }, "distance": 2.5 }],
            "invert": false
        }),
        SchemaKind::MaterialDecoration => json!({
            "materials": [{ "elementIds": ["0x10"], "color": { "r": 255, "g": 0, "b": 0 } }]
        }),
        SchemaKind::Movie => json!({
            "slides": [{ "viewId": "view-1", "durationSeconds": 4.0, "transition": "Fade" }]
        }),
        SchemaKind::GoogleTilesStyling => json!({ "showCreditsOnScreen": true }),
        SchemaKind::ITwinDisplayStyleOptions => json!({
            "renderMode": "SmoothShade",
            "backgroundColor": { "r": 10, "g": 20, "b": 30, "t": 0 }
        }),
        SchemaKind::UnrealAtmosphericStyling => json!({ "sunAzimuth": 120.0, "sunPitch": 35.0 }),
        SchemaKind::RealityDataStyling => json!({
            "pointCloud": { "size": 2.0, "shape": "Round" },
            "opacity": 0.5
        }),
    }
}

fn extra_for(category: SchemaCategory) -> CategoryExtraFields {
    match category {
        SchemaCategory::Standard => CategoryExtraFields::default(),
        SchemaCategory::ResourceStyling => CategoryExtraFields::related("obj-1"),
        SchemaCategory::ITwinScoped => CategoryExtraFields::itwin("itwin-1"),
    }
}

#[test]
fn test_categories_partition_all_kinds() {
    let mut seen = HashSet::new();
    for category in SchemaCategory::iter() {
        for kind in category.kinds() {
            assert!(seen.insert(kind), "{kind} listed in two categories");
        }
    }

    assert_eq!(seen.len(), SchemaKind::iter().count());
}

#[test]
fn test_category_membership() {
    let resource_styling: Vec<_> = SchemaCategory::ResourceStyling.kinds().collect();
    assert_eq!(
        resource_styling,
        vec![
            SchemaKind::ExpressionStyling,
            SchemaKind::IModelVisibility,
            SchemaKind::ScheduleSimulation,
            SchemaKind::RealityDataStyling,
        ]
    );

    let itwin_scoped: Vec<_> = SchemaCategory::ITwinScoped.kinds().collect();
    assert_eq!(itwin_scoped, vec![SchemaKind::RepositoryResource]);

    assert_eq!(SchemaCategory::Standard.kinds().count(), 9);
    assert_eq!(classify_category(SchemaKind::Layer), SchemaCategory::Standard);
}

#[test]
fn test_required_field_per_category() {
    assert_eq!(SchemaCategory::Standard.required_field(), None);
    assert_eq!(
        SchemaCategory::ResourceStyling.required_field(),
        Some("relatedId")
    );
    assert_eq!(SchemaCategory::ITwinScoped.required_field(), Some("iTwinId"));
}

#[test]
fn test_every_kind_is_registered() {
    for kind in all_kinds() {
        let versions: Vec<_> = versions(kind).collect();
        assert_eq!(versions, vec!["1.0.0"], "{kind}");
    }
    assert_eq!(descriptors().len(), SchemaKind::iter().count());
}

#[test]
fn test_descriptor_category_matches_kind() {
    for descriptor in descriptors() {
        assert_eq!(descriptor.category, descriptor.kind.category());
    }
}

#[test]
fn test_marker_fields_match_kind_category() {
    assert_eq!(LayerV1_0_0::category(), LayerV1_0_0::KIND.category());
    assert_eq!(
        ExpressionStylingV1_0_0::category(),
        SchemaCategory::ResourceStyling
    );
    assert_eq!(
        RepositoryResourceV1_0_0::category(),
        SchemaCategory::ITwinScoped
    );
    assert_eq!(
        IModelVisibilityV1_0_0::schema_ref(),
        "iModelVisibility@1.0.0"
    );
}

#[rstest]
#[case("Layer", SchemaKind::Layer)]
#[case("iModelVisibility", SchemaKind::IModelVisibility)]
#[case("ITwinDisplayStyleOptions", SchemaKind::ITwinDisplayStyleOptions)]
fn test_kind_tags(#[case] tag: &str, #[case] kind: SchemaKind) {
    assert_eq!(tag.parse::<SchemaKind>().unwrap(), kind);
    assert_eq!(kind.to_string(), tag);
    assert_eq!(serde_json::to_value(kind).unwrap(), json!(tag));
}

#[test]
fn test_resolve_unknown_kind() {
    let error = resolve("MyKind", "1.0.0").unwrap_err();
    assert!(matches!(error, SchemaError::UnknownSchemaKind(kind) if kind == "MyKind"));
}

#[test]
fn test_resolve_unknown_version() {
    let error = resolve("Layer", "2.0.0").unwrap_err();
    assert!(matches!(
        error,
        SchemaError::UnknownSchemaVersion { kind: SchemaKind::Layer, version } if version == "2.0.0"
    ));
}

#[test]
fn test_resolve_known_pair() {
    let descriptor = resolve("RealityDataStyling", "1.0.0").unwrap();
    assert_eq!(descriptor.kind, SchemaKind::RealityDataStyling);
    assert_eq!(descriptor.category, SchemaCategory::ResourceStyling);
    assert_eq!(descriptor.schema_ref(), "RealityDataStyling@1.0.0");
}

#[test]
fn test_build_create_payload_for_every_kind() {
    for kind in all_kinds() {
        let data = sample_data(kind);
        let payload =
            build_create_payload(kind.as_ref(), "1.0.0", data.clone(), extra_for(kind.category()))
                .unwrap_or_else(|e| panic!("{kind}: {e}"));

        assert_eq!(payload.kind, kind.to_string());
        assert_eq!(payload.version, "1.0.0");
        assert_eq!(payload.data, data);
    }
}

#[rstest]
#[case(SchemaKind::ExpressionStyling, "relatedId")]
#[case(SchemaKind::IModelVisibility, "relatedId")]
#[case(SchemaKind::ScheduleSimulation, "relatedId")]
#[case(SchemaKind::RealityDataStyling, "relatedId")]
#[case(SchemaKind::RepositoryResource, "iTwinId")]
fn test_build_create_payload_requires_category_field(
    #[case] kind: SchemaKind,
    #[case] expected_field: &str,
) {
    let error = build_create_payload(
        kind.as_ref(),
        "1.0.0",
        sample_data(kind),
        CategoryExtraFields::default(),
    )
    .unwrap_err();

    assert!(matches!(
        error,
        SchemaError::MissingCategoryField { kind: actual, field } if actual == kind && field == expected_field
    ));
}

#[test]
fn test_build_create_payload_wrong_category_field() {
    let error = build_create_payload(
        "RepositoryResource",
        "1.0.0",
        sample_data(SchemaKind::RepositoryResource),
        CategoryExtraFields::related("obj-1"),
    )
    .unwrap_err();

    assert!(matches!(error, SchemaError::MissingCategoryField { .. }));
}

#[test]
fn test_build_create_payload_carries_category_field() {
    let payload = build_create_payload(
        "ExpressionStyling",
        "1.0.0",
        sample_data(SchemaKind::ExpressionStyling),
        CategoryExtraFields::related("obj-7"),
    )
    .unwrap();
    assert_eq!(payload.related_id, Some(SceneObjectId::from("obj-7")));
    assert_eq!(payload.i_twin_id, None);

    let payload = build_create_payload(
        "RepositoryResource",
        "1.0.0",
        sample_data(SchemaKind::RepositoryResource),
        CategoryExtraFields::itwin("itwin-9"),
    )
    .unwrap();
    assert_eq!(payload.i_twin_id, Some(ITwinId::from("itwin-9")));

    let encoded = serde_json::to_value(&payload).unwrap();
    assert_eq!(encoded["iTwinId"], json!("itwin-9"));
    assert!(encoded.get("relatedId").is_none());
}

#[rstest]
#[case("View3d", json!({ "position": { "x": 0.0, "y": 0.0, "z": 0.0 } }))]
#[case("Layer", json!({ "visible": "yes" }))]
#[case("Layer", json!([]))]
#[case("iModelVisibility", json!({ "elements": { "shownList": ["0x0001"] } }))]
#[case("CameraAnimation", json!({ "keyframes": [], "interpolation": "Bezier" }))]
fn test_build_create_payload_rejects_invalid_data(#[case] kind: &str, #[case] data: Value) {
    let error = build_create_payload(kind, "1.0.0", data, extra_for(resolve(kind, "1.0.0").unwrap().category))
        .unwrap_err();
    assert!(matches!(error, SchemaError::InvalidSchemaData { .. }));
}

#[test]
fn test_build_update_payload() {
    let payload = build_update_payload(
        "ScheduleSimulation",
        "1.0.0",
        sample_data(SchemaKind::ScheduleSimulation),
        CategoryExtraFields::related("obj-2"),
    )
    .unwrap();

    assert_eq!(payload.kind.as_deref(), Some("ScheduleSimulation"));
    assert_eq!(payload.version.as_deref(), Some("1.0.0"));
    assert_eq!(payload.related_id, Some(SceneObjectId::from("obj-2")));
    assert_eq!(payload.id, None);

    let error = build_update_payload(
        "ScheduleSimulation",
        "1.0.0",
        sample_data(SchemaKind::ScheduleSimulation),
        CategoryExtraFields::default(),
    )
    .unwrap_err();
    assert!(matches!(error, SchemaError::MissingCategoryField { .. }));
}

#[test]
fn test_schema_data_resolve() {
    let data = SchemaData::resolve("Layer", "1.0.0", sample_data(SchemaKind::Layer)).unwrap();

    assert_eq!(data.kind(), SchemaKind::Layer);
    assert_eq!(data.version(), "1.0.0");
    assert_eq!(data.category(), SchemaCategory::Standard);
    assert_eq!(
        data,
        SchemaData::LayerV1_0_0(kinds::layer::v1_0_0::LayerData {
            visible: Some(true),
            description: Some("Piping".to_owned()),
        })
    );
    assert_eq!(data.to_value().unwrap(), sample_data(SchemaKind::Layer));
}

#[test]
fn test_schema_data_ignores_unknown_fields() {
    let data = SchemaData::resolve(
        "UnrealAtmosphericStyling",
        "1.0.0",
        json!({ "sunAzimuth": 1.0, "sunPitch": 2.0, "rainbow": true }),
    )
    .unwrap();
    assert_eq!(data.kind(), SchemaKind::UnrealAtmosphericStyling);
}

#[test]
fn test_schema_data_rejects_unknown_pair() {
    assert!(matches!(
        SchemaData::resolve("MyKind", "1.0.0", json!({})),
        Err(SchemaError::UnknownSchemaKind(_))
    ));
    assert!(matches!(
        SchemaData::decode(SchemaKind::Movie, "0.9.0", json!({ "slides": [] })),
        Err(SchemaError::UnknownSchemaVersion { .. })
    ));
}

#[test]
fn test_json_schema_service_validates_registered_kinds() {
    let service = JsonSchemaValidationService::with_registered_schemas().unwrap();

    for kind in all_kinds() {
        let schema_ref = schema_ref(kind, "1.0.0");
        assert!(service.is_loaded(&schema_ref));
        assert!(
            service.validate(&schema_ref, &sample_data(kind)),
            "{schema_ref}: {:?}",
            service.validation_errors(&schema_ref, &sample_data(kind))
        );
    }
}

#[test]
fn test_json_schema_service_rejects_invalid_data() {
    let service = JsonSchemaValidationService::with_registered_schemas().unwrap();

    let data = json!({ "sunAzimuth": 120.0 });
    assert!(!service.validate("UnrealAtmosphericStyling@1.0.0", &data));
    assert!(!service
        .validation_errors("UnrealAtmosphericStyling@1.0.0", &data)
        .is_empty());

    let data = json!({ "elements": { "shownList": ["not-an-id"] } });
    assert!(!service.validate("iModelVisibility@1.0.0", &data));
}

#[test]
fn test_json_schema_service_unknown_reference() {
    let service = JsonSchemaValidationService::new();

    assert!(!service.is_loaded("Layer@1.0.0"));
    assert!(!service.validate("Layer@1.0.0", &json!({})));
    assert_eq!(
        service.validation_errors("Layer@1.0.0", &json!({})),
        vec!["Schema `Layer@1.0.0` not loaded".to_owned()]
    );
}

#[test]
fn test_json_schema_service_custom_schema() {
    let mut service = JsonSchemaValidationService::new();
    service
        .load_schema(
            "Custom@1.0.0",
            &json!({
                "type": "object",
                "required": ["name"],
                "properties": { "name": { "type": "string" } }
            }),
        )
        .unwrap();

    assert!(service.validate("Custom@1.0.0", &json!({ "name": "a" })));
    assert!(!service.validate("Custom@1.0.0", &json!({ "name": 1 })));

    let error = service
        .load_schema("Broken@1.0.0", &json!({ "type": 12 }))
        .unwrap_err();
    assert!(matches!(error, SchemaError::InvalidJsonSchema { schema_ref, .. } if schema_ref == "Broken@1.0.0"));
}
