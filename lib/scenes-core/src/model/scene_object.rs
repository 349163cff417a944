use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use shared_types::{ITwinId, SceneId, SceneObjectId, UserId};
use time::OffsetDateTime;

use crate::schema::{
    CategoryExtraFields, CategoryFields, SchemaData, SchemaDefinition, SchemaError, check_payload,
    registry,
};

/// Create payload as sent on the wire
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectCreateDTO {
    pub id: Option<SceneObjectId>,
    pub kind: String,
    pub version: String,
    pub data: Value,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub related_id: Option<SceneObjectId>,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: Option<ITwinId>,
}

impl SceneObjectCreateDTO {
    pub fn with_id(mut self, id: impl Into<SceneObjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<SceneObjectId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Rejects an unregistered (kind, version), a missing category field and data
    /// of the wrong shape
    pub fn validate(&self) -> Result<(), SchemaError> {
        let extra = CategoryExtraFields {
            related_id: self.related_id.clone(),
            i_twin_id: self.i_twin_id.clone(),
        };
        check_payload(&self.kind, &self.version, &self.data, &extra)?;
        Ok(())
    }
}

/// Update payload as sent on the wire; `id` is only set inside bulk updates.
/// `kind`, `version` and the category field travel together with `data`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectUpdateDTO {
    pub id: Option<SceneObjectId>,
    pub kind: Option<String>,
    pub version: Option<String>,
    pub data: Option<Value>,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub related_id: Option<SceneObjectId>,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: Option<ITwinId>,
}

impl SceneObjectUpdateDTO {
    pub fn with_id(mut self, id: impl Into<SceneObjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Metadata-only updates always pass; replacing the data gets the same checks as a create
    pub fn validate(&self) -> Result<(), SchemaError> {
        let Some(data) = &self.data else {
            return Ok(());
        };
        let (Some(kind), Some(version)) = (&self.kind, &self.version) else {
            return Err(SchemaError::IncompleteUpdate);
        };

        let extra = CategoryExtraFields {
            related_id: self.related_id.clone(),
            i_twin_id: self.i_twin_id.clone(),
        };
        check_payload(kind, version, data, &extra)?;
        Ok(())
    }
}

/// Scene object as embedded in `sceneData.objects`
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectMinimalDTO {
    pub id: SceneObjectId,
    pub kind: String,
    pub version: String,
    pub data: Value,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub related_id: Option<SceneObjectId>,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: Option<ITwinId>,
}

impl SceneObjectMinimalDTO {
    pub fn resolve_data(&self) -> Result<SchemaData, SchemaError> {
        SchemaData::resolve(&self.kind, &self.version, self.data.clone())
    }
}

/// Scene object with the fields assigned by the server
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObjectDTO {
    pub id: SceneObjectId,
    pub scene_id: SceneId,
    pub kind: String,
    pub version: String,
    pub data: Value,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub related_id: Option<SceneObjectId>,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: Option<ITwinId>,
    pub created_by_id: UserId,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

impl SceneObjectDTO {
    pub fn resolve_data(&self) -> Result<SchemaData, SchemaError> {
        SchemaData::resolve(&self.kind, &self.version, self.data.clone())
    }
}

/// Create view of a scene object whose shape is fixed by `S` at compile time.
/// The category field required by `S` is part of `fields` and cannot be left out.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObjectCreate<S: SchemaDefinition> {
    pub id: Option<SceneObjectId>,
    pub data: S::Data,
    pub fields: S::Fields,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
}

impl<S: SchemaDefinition> SceneObjectCreate<S> {
    pub fn new(data: S::Data, fields: S::Fields) -> Self {
        Self {
            id: None,
            data,
            fields,
            display_name: None,
            order: None,
            parent_id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SceneObjectId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<SceneObjectId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

impl<S: SchemaDefinition> TryFrom<SceneObjectCreate<S>> for SceneObjectCreateDTO {
    type Error = SchemaError;

    fn try_from(value: SceneObjectCreate<S>) -> Result<Self, Self::Error> {
        let extra = value.fields.into_extra();

        Ok(Self {
            id: value.id,
            kind: S::KIND.to_string(),
            version: S::VERSION.to_owned(),
            data: serde_json::to_value(value.data).map_err(SchemaError::DataEncoding)?,
            display_name: value.display_name,
            order: value.order,
            parent_id: value.parent_id,
            related_id: extra.related_id,
            i_twin_id: extra.i_twin_id,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDataUpdate<S: SchemaDefinition> {
    pub data: S::Data,
    pub fields: S::Fields,
}

/// Update view of a scene object of schema `S`; replacing the data requires the
/// category field again
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObjectUpdate<S: SchemaDefinition> {
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub data: Option<SchemaDataUpdate<S>>,
}

impl<S: SchemaDefinition> Default for SceneObjectUpdate<S> {
    fn default() -> Self {
        Self {
            display_name: None,
            order: None,
            parent_id: None,
            data: None,
        }
    }
}

impl<S: SchemaDefinition> SceneObjectUpdate<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<SceneObjectId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_data(mut self, data: S::Data, fields: S::Fields) -> Self {
        self.data = Some(SchemaDataUpdate { data, fields });
        self
    }
}

impl<S: SchemaDefinition> TryFrom<SceneObjectUpdate<S>> for SceneObjectUpdateDTO {
    type Error = SchemaError;

    fn try_from(value: SceneObjectUpdate<S>) -> Result<Self, Self::Error> {
        let mut dto = SceneObjectUpdateDTO {
            display_name: value.display_name,
            order: value.order,
            parent_id: value.parent_id,
            ..Default::default()
        };

        if let Some(update) = value.data {
            let extra = update.fields.into_extra();
            dto.kind = Some(S::KIND.to_string());
            dto.version = Some(S::VERSION.to_owned());
            dto.data = Some(serde_json::to_value(update.data).map_err(SchemaError::DataEncoding)?);
            dto.related_id = extra.related_id;
            dto.i_twin_id = extra.i_twin_id;
        }

        Ok(dto)
    }
}

/// Scene object returned by the server, decoded into the shape registered for `S`
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject<S: SchemaDefinition> {
    pub id: SceneObjectId,
    pub scene_id: SceneId,
    pub data: S::Data,
    pub fields: S::Fields,
    pub display_name: Option<String>,
    pub order: Option<f64>,
    pub parent_id: Option<SceneObjectId>,
    pub created_by_id: UserId,
    pub creation_time: OffsetDateTime,
    pub last_modified: OffsetDateTime,
}

impl<S: SchemaDefinition> TryFrom<SceneObjectDTO> for SceneObject<S> {
    type Error = SchemaError;

    fn try_from(value: SceneObjectDTO) -> Result<Self, Self::Error> {
        if value.kind != S::KIND.to_string() || value.version != S::VERSION {
            return Err(SchemaError::SchemaMismatch {
                expected: S::schema_ref(),
                actual: format!("{}@{}", value.kind, value.version),
            });
        }

        let data = serde_json::from_value(value.data).map_err(|source| {
            SchemaError::InvalidSchemaData {
                kind: S::KIND,
                version: S::VERSION.to_owned(),
                source,
            }
        })?;
        let fields = S::Fields::from_extra(
            S::KIND,
            CategoryExtraFields {
                related_id: value.related_id,
                i_twin_id: value.i_twin_id,
            },
        )?;

        Ok(Self {
            id: value.id,
            scene_id: value.scene_id,
            data,
            fields,
            display_name: value.display_name,
            order: value.order,
            parent_id: value.parent_id,
            created_by_id: value.created_by_id,
            creation_time: value.creation_time,
            last_modified: value.last_modified,
        })
    }
}

impl<S: SchemaDefinition> SceneObject<S> {
    pub fn schema_ref(&self) -> String {
        registry::schema_ref(S::KIND, S::VERSION)
    }
}
