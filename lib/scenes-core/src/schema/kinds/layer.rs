//! Grouping node; other objects reference a layer through their `parentId`.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct LayerData {
        pub visible: Option<bool>,
        pub description: Option<String>,
    }
}
