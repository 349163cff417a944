//! Visibility overrides applied to the iModel referenced by `relatedId`.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::Id64;

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct IModelVisibilityData {
        pub categories: Option<VisibilityList>,
        pub models: Option<VisibilityList>,
        pub elements: Option<VisibilityList>,
    }

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct VisibilityList {
        pub shown_list: Option<Vec<Id64>>,
        pub hidden_list: Option<Vec<Id64>>,
    }
}
