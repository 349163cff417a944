pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::ColorDef;

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct RealityDataStylingData {
        pub point_cloud: Option<PointCloudStyle>,
        pub color_override: Option<ColorDef>,
        /// 0.0 invisible to 1.0 opaque
        pub opacity: Option<f64>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct PointCloudStyle {
        pub size: f64,
        pub shape: PointShape,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
    pub enum PointShape {
        Square,
        Round,
    }
}
