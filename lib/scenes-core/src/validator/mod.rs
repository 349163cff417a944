//! Structural guards for decoded response bodies.
//!
//! Every guard is a total predicate over any JSON value and never fails: it
//! answers `false` for non-objects, arrays, missing keys and mistyped fields.
//! Optional fields pass when absent and fail when `null` or mistyped. Guards
//! check cheap scalar fields before descending into nested collections, and
//! collection guards require every element to pass.
//!
//! The guards do not check the registry or the category of a kind: an object
//! of a ResourceStyling kind without `relatedId` passes, as does an unknown
//! kind. Typed decoding rejects those.

use serde_json::{Map, Value};

#[cfg(test)]
mod test;

type Object = Map<String, Value>;

fn has_string(object: &Object, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_string)
}

fn has_object(object: &Object, key: &str) -> bool {
    object.get(key).is_some_and(Value::is_object)
}

fn optional(object: &Object, key: &str, check: impl Fn(&Value) -> bool) -> bool {
    object.get(key).is_none_or(check)
}

fn is_array_of(value: &Value, check: impl Fn(&Value) -> bool) -> bool {
    value.as_array().is_some_and(|items| items.iter().all(check))
}

fn has_optional_object_metadata(object: &Object) -> bool {
    optional(object, "displayName", Value::is_string)
        && optional(object, "order", Value::is_number)
        && optional(object, "parentId", Value::is_string)
        && optional(object, "relatedId", Value::is_string)
        && optional(object, "iTwinId", Value::is_string)
}

pub fn is_link(value: &Value) -> bool {
    value.as_object().is_some_and(|object| has_string(object, "href"))
}

pub fn is_paging_links(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.get("self").is_some_and(is_link)
            && optional(object, "prev", is_link)
            && optional(object, "next", is_link)
    })
}

pub fn is_scene_object_create(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        has_string(object, "kind")
            && has_string(object, "version")
            && optional(object, "id", Value::is_string)
            && has_optional_object_metadata(object)
            && has_object(object, "data")
    })
}

pub fn is_scene_object_minimal(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        has_string(object, "id")
            && has_string(object, "kind")
            && has_string(object, "version")
            && has_optional_object_metadata(object)
            && has_object(object, "data")
    })
}

pub fn is_scene_object(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        has_string(object, "sceneId")
            && has_string(object, "createdById")
            && has_string(object, "creationTime")
            && has_string(object, "lastModified")
    }) && is_scene_object_minimal(value)
}

pub fn is_scene_data(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object
            .get("objects")
            .is_some_and(|objects| is_array_of(objects, is_scene_object_minimal))
    })
}

pub fn is_scene_minimal(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        has_string(object, "id")
            && has_string(object, "displayName")
            && has_string(object, "iTwinId")
            && has_string(object, "createdById")
            && has_string(object, "creationTime")
            && has_string(object, "lastModified")
            && optional(object, "parentId", Value::is_string)
    })
}

pub fn is_scene(value: &Value) -> bool {
    is_scene_minimal(value) && value.get("sceneData").is_some_and(is_scene_data)
}

pub fn is_scene_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("scene"))
        .is_some_and(is_scene)
}

pub fn is_scene_list_response(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        optional(object, "_links", is_paging_links)
            && object
                .get("scenes")
                .is_some_and(|scenes| is_array_of(scenes, is_scene_minimal))
    })
}

pub fn is_scene_object_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("object"))
        .is_some_and(is_scene_object)
}

pub fn is_scene_object_list_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("objects"))
        .is_some_and(|objects| is_array_of(objects, is_scene_object_minimal))
}

/// Body of a create or bulk update, where the server answers with full objects
pub fn is_scene_object_full_list_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("objects"))
        .is_some_and(|objects| is_array_of(objects, is_scene_object))
}

pub fn is_scene_object_paged_response(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.get("_links").is_some_and(is_paging_links)
            && object
                .get("objects")
                .is_some_and(|objects| is_array_of(objects, is_scene_object))
    })
}

pub fn is_error_detail(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| has_string(object, "code") && has_string(object, "message"))
}

pub fn is_error(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        has_string(object, "code")
            && has_string(object, "message")
            && optional(object, "target", Value::is_string)
            && optional(object, "details", |details| is_array_of(details, is_error_detail))
    })
}

pub fn is_error_response(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("error"))
        .is_some_and(is_error)
}
