pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::{Point3d, Vector3d};

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CameraAnimationData {
        pub keyframes: Vec<CameraKeyframe>,
        pub interpolation: Interpolation,
        pub is_looping: Option<bool>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct CameraKeyframe {
        /// Seconds from the start of the animation
        pub time: f64,
        pub position: Point3d,
        pub direction: Vector3d,
        pub up: Vector3d,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
    pub enum Interpolation {
        Linear,
        Step,
        Spline,
    }
}
