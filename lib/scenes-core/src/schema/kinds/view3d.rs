//! Saved 3D camera.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::{Point3d, Transform, Vector3d};

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct View3dData {
        pub position: Point3d,
        pub direction: Vector3d,
        pub up: Vector3d,
        pub aspect_ratio: f64,
        pub near: Option<f64>,
        pub far: Option<f64>,
        pub is_orthographic: Option<bool>,
        pub horizontal_field_of_view: Option<f64>,
        pub ecef_transform: Option<Transform>,
    }
}
