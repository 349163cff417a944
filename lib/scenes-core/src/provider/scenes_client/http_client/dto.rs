use itertools::Itertools;
use serde::{Deserialize, Serialize};
use shared_types::{ITwinId, SceneObjectId};

use crate::model::link::{Page, PagingLinks};
use crate::model::scene::{Scene, SceneMinimal};
use crate::model::scene_object::{SceneObjectCreateDTO, SceneObjectDTO, SceneObjectUpdateDTO};
use crate::provider::scenes_client::error::ErrorEnvelope;

#[derive(Clone, Debug, Serialize)]
pub(super) struct ITwinQueryRestDTO<'a> {
    #[serde(rename = "iTwinId")]
    pub i_twin_id: &'a ITwinId,
}

/// Comma separated ids of a bulk delete
#[derive(Clone, Debug, Serialize)]
pub(super) struct IdsQueryRestDTO {
    pub ids: String,
}

impl From<&[SceneObjectId]> for IdsQueryRestDTO {
    fn from(value: &[SceneObjectId]) -> Self {
        Self {
            ids: value.iter().map(SceneObjectId::as_str).join(","),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct SceneObjectsCreateRequestRestDTO {
    pub objects: Vec<SceneObjectCreateDTO>,
}

#[derive(Clone, Debug, Serialize)]
pub(super) struct SceneObjectsUpdateRequestRestDTO {
    pub objects: Vec<SceneObjectUpdateDTO>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct SceneResponseRestDTO {
    pub scene: Scene,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct SceneListResponseRestDTO {
    pub scenes: Vec<SceneMinimal>,
    #[serde(rename = "_links")]
    pub links: Option<PagingLinks>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct SceneObjectResponseRestDTO {
    pub object: SceneObjectDTO,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct SceneObjectListResponseRestDTO {
    pub objects: Vec<SceneObjectDTO>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct SceneObjectPagedResponseRestDTO {
    pub objects: Vec<SceneObjectDTO>,
    #[serde(rename = "_links")]
    pub links: PagingLinks,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct ErrorResponseRestDTO {
    pub error: ErrorEnvelope,
}

impl From<SceneListResponseRestDTO> for Page<SceneMinimal> {
    fn from(value: SceneListResponseRestDTO) -> Self {
        Self {
            items: value.scenes,
            links: value.links,
        }
    }
}

impl From<SceneObjectPagedResponseRestDTO> for Page<SceneObjectDTO> {
    fn from(value: SceneObjectPagedResponseRestDTO) -> Self {
        Self {
            items: value.objects,
            links: Some(value.links),
        }
    }
}
