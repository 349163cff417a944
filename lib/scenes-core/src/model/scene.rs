use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{ITwinId, SceneId, UserId};
use time::OffsetDateTime;

use super::scene_object::{SceneObjectCreateDTO, SceneObjectMinimalDTO};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    pub objects: Vec<SceneObjectMinimalDTO>,
}

/// Scene without its object collection, as returned by list operations
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMinimal {
    pub id: SceneId,
    pub display_name: String,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: ITwinId,
    pub parent_id: Option<SceneId>,
    pub created_by_id: UserId,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: SceneId,
    pub display_name: String,
    #[serde(rename = "iTwinId")]
    pub i_twin_id: ITwinId,
    pub parent_id: Option<SceneId>,
    pub created_by_id: UserId,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_modified: OffsetDateTime,
    pub scene_data: SceneData,
}

impl From<Scene> for SceneMinimal {
    fn from(value: Scene) -> Self {
        Self {
            id: value.id,
            display_name: value.display_name,
            i_twin_id: value.i_twin_id,
            parent_id: value.parent_id,
            created_by_id: value.created_by_id,
            creation_time: value.creation_time,
            last_modified: value.last_modified,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDataCreate {
    pub objects: Vec<SceneObjectCreateDTO>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneCreate {
    pub id: Option<SceneId>,
    pub display_name: String,
    pub parent_id: Option<SceneId>,
    pub scene_data: Option<SceneDataCreate>,
}

impl SceneCreate {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: None,
            display_name: display_name.into(),
            parent_id: None,
            scene_data: None,
        }
    }

    pub fn with_objects(mut self, objects: Vec<SceneObjectCreateDTO>) -> Self {
        self.scene_data = Some(SceneDataCreate { objects });
        self
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneUpdate {
    pub display_name: Option<String>,
    pub parent_id: Option<SceneId>,
}
