use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::{ITwinId, SceneId, SceneObjectId};
use url::Url;

use super::HTTPScenesClient;
use super::dto::{
    ErrorResponseRestDTO, ITwinQueryRestDTO, IdsQueryRestDTO, SceneListResponseRestDTO,
    SceneObjectListResponseRestDTO, SceneObjectPagedResponseRestDTO, SceneObjectResponseRestDTO,
    SceneObjectsCreateRequestRestDTO, SceneObjectsUpdateRequestRestDTO, SceneResponseRestDTO,
};
use crate::model::link::Page;
use crate::model::list_query::ListQuery;
use crate::model::scene::{Scene, SceneCreate, SceneMinimal, SceneUpdate};
use crate::model::scene_object::{SceneObjectCreateDTO, SceneObjectDTO, SceneObjectUpdateDTO};
use crate::provider::http_client::{RequestBuilder, Response};
use crate::provider::scenes_client::ScenesClient;
use crate::provider::scenes_client::error::{ErrorEnvelope, RemoteApiError, ScenesClientError};
use crate::schema::SchemaError;
use crate::validator;

/// Structural check a successful response body must pass before it is decoded
struct ResponseGuard {
    name: &'static str,
    expected: &'static str,
    check: fn(&Value) -> bool,
}

const SCENE_RESPONSE: ResponseGuard = ResponseGuard {
    name: "is_scene_response",
    expected: "{ scene: Scene }",
    check: validator::is_scene_response,
};

const SCENE_LIST_RESPONSE: ResponseGuard = ResponseGuard {
    name: "is_scene_list_response",
    expected: "{ scenes: SceneMinimal[], _links?: PagingLinks }",
    check: validator::is_scene_list_response,
};

const SCENE_OBJECT_RESPONSE: ResponseGuard = ResponseGuard {
    name: "is_scene_object_response",
    expected: "{ object: SceneObject }",
    check: validator::is_scene_object_response,
};

const SCENE_OBJECT_FULL_LIST_RESPONSE: ResponseGuard = ResponseGuard {
    name: "is_scene_object_full_list_response",
    expected: "{ objects: SceneObject[] }",
    check: validator::is_scene_object_full_list_response,
};

const SCENE_OBJECT_PAGED_RESPONSE: ResponseGuard = ResponseGuard {
    name: "is_scene_object_paged_response",
    expected: "{ objects: SceneObject[], _links: PagingLinks }",
    check: validator::is_scene_object_paged_response,
};

/// How a non-2xx body that is not an error envelope is reported
#[derive(Clone, Copy, Debug)]
enum MalformedErrorBody {
    Reject,
    /// Only for deletes: reported as a remote error with an empty envelope
    Tolerate,
}

#[async_trait::async_trait]
impl ScenesClient for HTTPScenesClient {
    async fn get_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
    ) -> Result<Scene, ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str()])?;
        let request = self.http_client.get(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;

        let response = self.send(request).await?;
        parse_response::<SceneResponseRestDTO>(response, "Error fetching scene", &SCENE_RESPONSE)
            .map(|body| body.scene)
    }

    async fn get_scenes(
        &self,
        i_twin_id: &ITwinId,
        query: ListQuery,
    ) -> Result<Page<SceneMinimal>, ScenesClientError> {
        let url = self.endpoint(&[])?;
        let request = self.http_client.get(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;
        let request = with_query(request, self.list_query(query))?;

        let response = self.send(request).await?;
        parse_response::<SceneListResponseRestDTO>(
            response,
            "Error fetching scenes",
            &SCENE_LIST_RESPONSE,
        )
        .map(Into::into)
    }

    async fn create_scene(
        &self,
        i_twin_id: &ITwinId,
        scene: SceneCreate,
    ) -> Result<Scene, ScenesClientError> {
        if let Some(scene_data) = &scene.scene_data {
            validate_all(&scene_data.objects, SceneObjectCreateDTO::validate)?;
        }

        let url = self.endpoint(&[])?;
        let request = self.http_client.post(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?
            .json(scene)
            .context("json error")
            .map_err(ScenesClientError::Transport)?;

        let response = self.send(request).await?;
        parse_response::<SceneResponseRestDTO>(response, "Error creating scene", &SCENE_RESPONSE)
            .map(|body| body.scene)
    }

    async fn update_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        update: SceneUpdate,
    ) -> Result<Scene, ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str()])?;
        let request = self.http_client.patch(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?
            .json(update)
            .context("json error")
            .map_err(ScenesClientError::Transport)?;

        let response = self.send(request).await?;
        parse_response::<SceneResponseRestDTO>(response, "Error updating scene", &SCENE_RESPONSE)
            .map(|body| body.scene)
    }

    async fn delete_scene(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
    ) -> Result<(), ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str()])?;
        let request = self.http_client.delete(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;

        self.send_delete(request).await
    }

    async fn get_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
    ) -> Result<SceneObjectDTO, ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str(), "objects", object_id.as_str()])?;
        let request = self.http_client.get(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;

        let response = self.send(request).await?;
        parse_response::<SceneObjectResponseRestDTO>(
            response,
            "Error fetching scene object",
            &SCENE_OBJECT_RESPONSE,
        )
        .map(|body| body.object)
    }

    async fn get_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        query: ListQuery,
    ) -> Result<Page<SceneObjectDTO>, ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str(), "objects"])?;
        let request = self.http_client.get(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;
        let request = with_query(request, self.list_query(query))?;

        let response = self.send(request).await?;
        parse_response::<SceneObjectPagedResponseRestDTO>(
            response,
            "Error fetching scene objects",
            &SCENE_OBJECT_PAGED_RESPONSE,
        )
        .map(Into::into)
    }

    async fn get_objects_page(
        &self,
        href: &str,
    ) -> Result<Page<SceneObjectDTO>, ScenesClientError> {
        let url = Url::parse(href)?;

        let response = self.send(self.http_client.get(url.as_str())).await?;
        parse_response::<SceneObjectPagedResponseRestDTO>(
            response,
            "Error fetching scene objects",
            &SCENE_OBJECT_PAGED_RESPONSE,
        )
        .map(Into::into)
    }

    async fn create_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        objects: Vec<SceneObjectCreateDTO>,
    ) -> Result<Vec<SceneObjectDTO>, ScenesClientError> {
        validate_all(&objects, SceneObjectCreateDTO::validate)?;

        let url = self.endpoint(&[scene_id.as_str(), "objects"])?;
        let request = self.http_client.post(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?
            .json(SceneObjectsCreateRequestRestDTO { objects })
            .context("json error")
            .map_err(ScenesClientError::Transport)?;

        let response = self.send(request).await?;
        parse_response::<SceneObjectListResponseRestDTO>(
            response,
            "Error creating scene objects",
            &SCENE_OBJECT_FULL_LIST_RESPONSE,
        )
        .map(|body| body.objects)
    }

    async fn update_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
        update: SceneObjectUpdateDTO,
    ) -> Result<SceneObjectDTO, ScenesClientError> {
        update.validate()?;

        let url = self.endpoint(&[scene_id.as_str(), "objects", object_id.as_str()])?;
        let request = self.http_client.patch(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?
            .json(update)
            .context("json error")
            .map_err(ScenesClientError::Transport)?;

        let response = self.send(request).await?;
        parse_response::<SceneObjectResponseRestDTO>(
            response,
            "Error updating scene object",
            &SCENE_OBJECT_RESPONSE,
        )
        .map(|body| body.object)
    }

    async fn update_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        objects: Vec<SceneObjectUpdateDTO>,
    ) -> Result<Vec<SceneObjectDTO>, ScenesClientError> {
        validate_all(&objects, SceneObjectUpdateDTO::validate)?;

        let url = self.endpoint(&[scene_id.as_str(), "objects"])?;
        let request = self.http_client.patch(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?
            .json(SceneObjectsUpdateRequestRestDTO { objects })
            .context("json error")
            .map_err(ScenesClientError::Transport)?;

        let response = self.send(request).await?;
        parse_response::<SceneObjectListResponseRestDTO>(
            response,
            "Error updating scene objects",
            &SCENE_OBJECT_FULL_LIST_RESPONSE,
        )
        .map(|body| body.objects)
    }

    async fn delete_object(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_id: &SceneObjectId,
    ) -> Result<(), ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str(), "objects", object_id.as_str()])?;
        let request = self.http_client.delete(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;

        self.send_delete(request).await
    }

    async fn delete_objects(
        &self,
        i_twin_id: &ITwinId,
        scene_id: &SceneId,
        object_ids: &[SceneObjectId],
    ) -> Result<(), ScenesClientError> {
        let url = self.endpoint(&[scene_id.as_str(), "objects"])?;
        let request = self.http_client.delete(url.as_str());
        let request = with_query(request, ITwinQueryRestDTO { i_twin_id })?;
        let request = with_query(request, IdsQueryRestDTO::from(object_ids))?;

        self.send_delete(request).await
    }
}

impl HTTPScenesClient {
    /// Appends path segments to the configured base url, escaping each of them
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ScenesClientError> {
        let mut url = self.config.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Falls back to the configured page size when the caller did not set `$top`
    fn list_query(&self, query: ListQuery) -> ListQuery {
        ListQuery {
            top: query.top.or(self.config.page_size),
            ..query
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ScenesClientError> {
        let token = self
            .token_provider
            .access_token()
            .await
            .map_err(ScenesClientError::AccessToken)?;

        request
            .header("Accept", &self.config.accept)
            .bearer_auth(&token)
            .send()
            .await
            .context("send error")
            .map_err(ScenesClientError::Transport)
    }

    async fn send_delete(&self, request: RequestBuilder) -> Result<(), ScenesClientError> {
        let response = self.send(request).await?;
        if !response.status.is_success() {
            return Err(remote_error(&response, MalformedErrorBody::Tolerate));
        }
        Ok(())
    }
}

/// Outgoing objects are checked against the registry before anything is sent
fn validate_all<T>(
    objects: &[T],
    validate: impl Fn(&T) -> Result<(), SchemaError>,
) -> Result<(), ScenesClientError> {
    objects
        .iter()
        .try_for_each(validate)
        .map_err(ScenesClientError::Schema)
}

fn with_query<T: Serialize>(
    request: RequestBuilder,
    query: T,
) -> Result<RequestBuilder, ScenesClientError> {
    request
        .query(query)
        .context("query error")
        .map_err(ScenesClientError::Transport)
}

fn parse_response<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
    guard: &ResponseGuard,
) -> Result<T, ScenesClientError> {
    if !response.status.is_success() {
        return Err(remote_error(&response, MalformedErrorBody::Reject));
    }

    let unexpected = || ScenesClientError::UnexpectedResponseFormat {
        context,
        guard: guard.name,
        expected: guard.expected,
    };

    let body = response.json::<Value>().map_err(|_| unexpected())?;
    if !(guard.check)(&body) {
        tracing::warn!(context, guard = guard.name, status = %response.status, "Response rejected");
        return Err(unexpected());
    }

    serde_json::from_value(body).map_err(|error| {
        tracing::warn!(context, %error, "Response does not decode");
        unexpected()
    })
}

fn remote_error(response: &Response, malformed: MalformedErrorBody) -> ScenesClientError {
    let status = response.status.0;
    let body = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .filter(validator::is_error_response)
        .and_then(|body| serde_json::from_value::<ErrorResponseRestDTO>(body).ok());

    match (body, malformed) {
        (Some(body), _) => ScenesClientError::RemoteApi(RemoteApiError {
            status,
            error: body.error,
        }),
        (None, MalformedErrorBody::Tolerate) => {
            tracing::debug!(%status, "Delete failed without an error envelope");
            ScenesClientError::RemoteApi(RemoteApiError {
                status,
                error: ErrorEnvelope::default(),
            })
        }
        (None, MalformedErrorBody::Reject) => {
            tracing::warn!(%status, "Error response without a valid error envelope");
            ScenesClientError::MalformedErrorEnvelope(RemoteApiError {
                status,
                error: ErrorEnvelope::default(),
            })
        }
    }
}
