//! Client of the Scenes REST API.
//!
//! Every decoded response body passes its structural guard from
//! [`crate::validator`] before it is deserialized, so callers never receive
//! partially matching data.

use shared_types::{ITwinId, SceneId, SceneObjectId};

use crate::model::link::Page;
use crate::model::list_query::ListQuery;
use crate::model::scene::{Scene, SceneCreate, SceneMinimal, SceneUpdate};
use crate::model::scene_object::{
    SceneObject, SceneObjectCreate, SceneObjectCreateDTO, SceneObjectDTO, SceneObjectUpdate,
    SceneObjectUpdateDTO,
};
use crate::provider::scenes_client::error::ScenesClientError;
use crate::schema::SchemaDefinition;

pub mod error;
pub mod http_client;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ScenesClient: Send + Sync {
    async fn get_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
    ) -> Result<Scene, ScenesClientError>;

    async fn get_scenes(
        &self,
        i_twin_id: &ITwinId,
        query: ListQuery,
    ) -> Result<Page<SceneMinimal>, ScenesClientError>;

    async fn create_scene(
        &self,
        i_twin_id: &ITwinId,
        scene: SceneCreate,
    ) -> Result<Scene, ScenesClientError>;

    async fn update_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        update: SceneUpdate,
    ) -> Result<Scene, ScenesClientError>;

    async fn delete_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
    ) -> Result<(), ScenesClientError>;

    async fn get_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
    ) -> Result<SceneObjectDTO, ScenesClientError>;

    async fn get_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        query: ListQuery,
    ) -> Result<Page<SceneObjectDTO>, ScenesClientError>;

    /// Fetches the page a `_links.next.href` of a previous page points to
    async fn get_objects_page(&self, href: &str)
    -> Result<Page<SceneObjectDTO>, ScenesClientError>;

    async fn create_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        objects: Vec<SceneObjectCreateDTO>,
    ) -> Result<Vec<SceneObjectDTO>, ScenesClientError>;

    async fn update_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
        update: SceneObjectUpdateDTO,
    ) -> Result<SceneObjectDTO, ScenesClientError>;

    /// Bulk update; every entry must carry its `id`
    async fn update_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        objects: Vec<SceneObjectUpdateDTO>,
    ) -> Result<Vec<SceneObjectDTO>, ScenesClientError>;

    async fn delete_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
    ) -> Result<(), ScenesClientError>;

    async fn delete_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_ids: &[SceneObjectId],
    ) -> Result<(), ScenesClientError>;
}

/// Typed operations on top of any [`ScenesClient`]
#[async_trait::async_trait]
pub trait ScenesClientExt: ScenesClient {
    async fn create_object<S: SchemaDefinition>(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object: SceneObjectCreate<S>,
    ) -> Result<SceneObject<S>, ScenesClientError> {
        let request = SceneObjectCreateDTO::try_from(object)?;

        let created = self
            .create_objects(i_twin_id, scene_id, vec![request])
            .await?
            .into_iter()
            .next()
            .ok_or(ScenesClientError::UnexpectedResponseFormat {
                context: "Error creating scene object",
                guard: "single_created_object",
                expected: "{ objects: [SceneObject] }",
            })?;

        Ok(SceneObject::try_from(created)?)
    }

    async fn get_typed_object<S: SchemaDefinition>(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
    ) -> Result<SceneObject<S>, ScenesClientError> {
        let object = self.get_object(i_twin_id, scene_id, object_id).await?;
        Ok(SceneObject::try_from(object)?)
    }

    async fn update_typed_object<S: SchemaDefinition>(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
        update: SceneObjectUpdate<S>,
    ) -> Result<SceneObject<S>, ScenesClientError> {
        let request = SceneObjectUpdateDTO::try_from(update)?;
        let object = self
            .update_object(i_twin_id, scene_id, object_id, request)
            .await?;
        Ok(SceneObject::try_from(object)?)
    }

    /// Reads every object of a scene, following `next` links until the last page.
    /// A `next` link pointing at the page just fetched ends the walk.
    async fn get_all_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        query: ListQuery,
    ) -> Result<Vec<SceneObjectDTO>, ScenesClientError> {
        let mut page = self.get_objects(i_twin_id, scene_id, query).await?;
        let mut objects = Vec::new();
        let mut fetched_href: Option<String> = None;

        loop {
            let next = page.next_href().map(ToOwned::to_owned);
            objects.append(&mut page.items);

            let Some(href) = next else {
                break;
            };
            if fetched_href.as_deref() == Some(href.as_str()) {
                tracing::warn!(%href, "Next page link repeats the page just fetched");
                break;
            }

            tracing::debug!(%href, fetched = objects.len(), "Fetching next page of scene objects");
            page = self.get_objects_page(&href).await?;
            fetched_href = Some(href);
        }

        Ok(objects)
    }
}

impl<T: ScenesClient + ?Sized> ScenesClientExt for T {}
