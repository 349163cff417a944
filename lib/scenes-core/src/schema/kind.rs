use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::category::SchemaCategory;

/// Tag naming one family of scene object content
#[derive(
    Debug,
    Copy,
    Clone,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum SchemaKind {
    Layer,
    View3d,
    RepositoryResource,
    ExpressionStyling,
    #[serde(rename = "iModelVisibility")]
    #[strum(serialize = "iModelVisibility")]
    IModelVisibility,
    ScheduleSimulation,
    CameraAnimation,
    Cutout,
    MaterialDecoration,
    Movie,
    GoogleTilesStyling,
    ITwinDisplayStyleOptions,
    UnrealAtmosphericStyling,
    RealityDataStyling,
}

impl SchemaKind {
    pub const fn category(&self) -> SchemaCategory {
        match self {
            Self::ExpressionStyling
            | Self::ScheduleSimulation
            | Self::IModelVisibility
            | Self::RealityDataStyling => SchemaCategory::ResourceStyling,
            Self::RepositoryResource => SchemaCategory::ITwinScoped,
            Self::Layer
            | Self::View3d
            | Self::CameraAnimation
            | Self::Cutout
            | Self::MaterialDecoration
            | Self::Movie
            | Self::GoogleTilesStyling
            | Self::ITwinDisplayStyleOptions
            | Self::UnrealAtmosphericStyling => SchemaCategory::Standard,
        }
    }
}
