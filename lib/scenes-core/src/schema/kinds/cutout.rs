//! Clip volume bounded by a convex set of planes.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::{ClipPlane, Transform};

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CutoutData {
        pub planes: Vec<ClipPlane>,
        pub transform: Option<Transform>,
        pub invert: Option<bool>,
    }
}
