use serde_json::Value;

use super::category::CategoryExtraFields;
use super::error::SchemaError;
use super::registry::{SchemaData, SchemaDescriptor, resolve};
use crate::model::scene_object::{SceneObjectCreateDTO, SceneObjectUpdateDTO};

/// Checks that a payload names a registered pair, carries the field its category
/// requires and holds data of the registered shape
pub fn check_payload(
    kind: &str,
    version: &str,
    data: &Value,
    extra: &CategoryExtraFields,
) -> Result<&'static SchemaDescriptor, SchemaError> {
    let descriptor = resolve(kind, version)?;
    descriptor.category.check(descriptor.kind, extra)?;
    SchemaData::decode(descriptor.kind, version, data.clone())?;
    Ok(descriptor)
}

/// Builds a create payload for a (kind, version) only known at runtime.
///
/// Fails on an unregistered pair, on a missing category field and on data not
/// matching the registered shape. The data is sent as given.
pub fn build_create_payload(
    kind: &str,
    version: &str,
    data: Value,
    extra: CategoryExtraFields,
) -> Result<SceneObjectCreateDTO, SchemaError> {
    let descriptor = check_payload(kind, version, &data, &extra)?;

    Ok(SceneObjectCreateDTO {
        id: None,
        kind: descriptor.kind.to_string(),
        version: descriptor.version.to_owned(),
        data,
        display_name: None,
        order: None,
        parent_id: None,
        related_id: extra.related_id,
        i_twin_id: extra.i_twin_id,
    })
}

/// Builds an update payload replacing the data of an object, with the same checks as
/// [`build_create_payload`]. Metadata-only updates need no resolution and can use
/// [`SceneObjectUpdateDTO::default`] directly.
pub fn build_update_payload(
    kind: &str,
    version: &str,
    data: Value,
    extra: CategoryExtraFields,
) -> Result<SceneObjectUpdateDTO, SchemaError> {
    let descriptor = check_payload(kind, version, &data, &extra)?;

    Ok(SceneObjectUpdateDTO {
        kind: Some(descriptor.kind.to_string()),
        version: Some(descriptor.version.to_owned()),
        data: Some(data),
        related_id: extra.related_id,
        i_twin_id: extra.i_twin_id,
        ..Default::default()
    })
}
