pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::Range3d;

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct GoogleTilesStylingData {
        pub maximum_screen_space_error: Option<f64>,
        pub show_credits_on_screen: Option<bool>,
        pub hidden_areas: Option<Vec<Range3d>>,
    }
}
