//! Sequence of saved views played one after another.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;
    use shared_types::SceneObjectId;

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct MovieData {
        pub slides: Vec<MovieSlide>,
        pub is_looping: Option<bool>,
    }

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct MovieSlide {
        /// Scene object of kind `View3d`
        pub view_id: SceneObjectId,
        pub duration_seconds: f64,
        pub transition: Option<Transition>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
    pub enum Transition {
        Cut,
        Fade,
        Fly,
    }
}
