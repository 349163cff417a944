pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::{ColorDef, Id64};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct MaterialDecorationData {
        pub materials: Vec<MaterialOverride>,
    }

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct MaterialOverride {
        pub element_ids: Vec<Id64>,
        pub color: Option<ColorDef>,
        /// 0.0 opaque to 1.0 invisible
        pub transparency: Option<f64>,
        pub roughness: Option<f64>,
        pub metallic: Option<f64>,
    }
}
