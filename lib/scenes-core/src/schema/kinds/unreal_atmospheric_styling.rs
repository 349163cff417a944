//! Sun, sky and weather settings for Unreal Engine based viewers.

pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    #[skip_serializing_none]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct UnrealAtmosphericStylingData {
        pub sun_azimuth: f64,
        pub sun_pitch: f64,
        pub heliodon_longitude: Option<f64>,
        pub heliodon_latitude: Option<f64>,
        /// ISO-8601 date used to place the sun
        pub heliodon_date: Option<String>,
        pub weather: Option<f64>,
        pub wind_orientation: Option<f64>,
        pub wind_force: Option<f64>,
        pub fog: Option<f64>,
        pub cloud_coverage: Option<f64>,
        pub exposure: Option<f64>,
        pub use_heliodon: Option<bool>,
    }
}
