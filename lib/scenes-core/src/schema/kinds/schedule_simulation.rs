pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::Id64;

    /// Playback state of the construction schedule embedded in the related iModel
    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct ScheduleSimulationData {
        pub timeline_id: Option<Id64>,
        /// Seconds since the unix epoch
        pub time_point: Option<f64>,
        pub playback_speed: Option<f64>,
        pub is_looping: Option<bool>,
    }
}
