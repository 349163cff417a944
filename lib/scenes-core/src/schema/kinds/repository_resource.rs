//! Content stored in an iTwin repository (iModel, reality data, map layer, ...).

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::Guid;

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct RepositoryResourceData {
        pub id: String,
        pub class: String,
        pub repository_id: Guid,
        pub visible: Option<bool>,
    }
}
