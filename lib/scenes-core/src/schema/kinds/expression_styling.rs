pub mod v1_0_0 {
    use std::collections::BTreeMap;

    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    /// Declarative 3D Tiles style; every expression is evaluated per feature
    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpressionStylingData {
        pub show: Option<String>,
        pub color: Option<String>,
        pub point_size: Option<String>,
        pub defines: Option<BTreeMap<String, String>>,
    }
}
