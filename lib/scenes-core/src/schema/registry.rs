use std::str::FromStr;

use serde_json::Value;
use strum::IntoEnumIterator;

use super::SchemaDefinition;
use super::category::{
    CategoryFields, ITwinScopedFields, ResourceStylingFields, SchemaCategory, StandardFields,
};
use super::error::SchemaError;
use super::kind::SchemaKind;
use super::kinds::*;

/// Runtime description of one registered (kind, version) pair
#[derive(Debug, Clone, Copy)]
pub struct SchemaDescriptor {
    pub kind: SchemaKind,
    pub version: &'static str,
    pub category: SchemaCategory,
    json_schema: fn() -> Value,
}

impl SchemaDescriptor {
    /// `<kind>@<version>`, the key used by the schema validation service
    pub fn schema_ref(&self) -> String {
        schema_ref(self.kind, self.version)
    }

    pub fn json_schema(&self) -> Value {
        (self.json_schema)()
    }
}

pub fn schema_ref(kind: SchemaKind, version: &str) -> String {
    format!("{kind}@{version}")
}

/// Declares the marker type, the `SchemaData` variant and the descriptor of every
/// registered (kind, version) pair from a single table
macro_rules! registered_schemas {
    ($( $marker:ident => $kind:ident @ $version:literal : $data:ty, $fields:ty; )*) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $marker;

            impl SchemaDefinition for $marker {
                const KIND: SchemaKind = SchemaKind::$kind;
                const VERSION: &'static str = $version;
                type Data = $data;
                type Fields = $fields;
            }
        )*

        /// Data payload resolved at runtime against the registry
        #[derive(Debug, Clone, PartialEq)]
        pub enum SchemaData {
            $( $marker($data), )*
        }

        impl SchemaData {
            pub fn kind(&self) -> SchemaKind {
                match self {
                    $( Self::$marker(_) => SchemaKind::$kind, )*
                }
            }

            pub fn version(&self) -> &'static str {
                match self {
                    $( Self::$marker(_) => $version, )*
                }
            }

            pub fn decode(kind: SchemaKind, version: &str, data: Value) -> Result<Self, SchemaError> {
                match (kind, version) {
                    $(
                        (SchemaKind::$kind, $version) => serde_json::from_value(data)
                            .map(Self::$marker)
                            .map_err(|source| SchemaError::InvalidSchemaData {
                                kind,
                                version: version.to_owned(),
                                source,
                            }),
                    )*
                    _ => Err(SchemaError::UnknownSchemaVersion {
                        kind,
                        version: version.to_owned(),
                    }),
                }
            }

            pub fn to_value(&self) -> Result<Value, SchemaError> {
                let value = match self {
                    $( Self::$marker(data) => serde_json::to_value(data), )*
                };
                value.map_err(SchemaError::DataEncoding)
            }
        }

        static DESCRIPTORS: &[SchemaDescriptor] = &[
            $(
                SchemaDescriptor {
                    kind: SchemaKind::$kind,
                    version: $version,
                    category: <$fields as CategoryFields>::CATEGORY,
                    json_schema: <$marker as SchemaDefinition>::json_schema,
                },
            )*
        ];
    };
}

registered_schemas! {
    LayerV1_0_0 => Layer @ "1.0.0":
        layer::v1_0_0::LayerData, StandardFields;
    View3dV1_0_0 => View3d @ "1.0.0":
        view3d::v1_0_0::View3dData, StandardFields;
    RepositoryResourceV1_0_0 => RepositoryResource @ "1.0.0":
        repository_resource::v1_0_0::RepositoryResourceData, ITwinScopedFields;
    ExpressionStylingV1_0_0 => ExpressionStyling @ "1.0.0":
        expression_styling::v1_0_0::ExpressionStylingData, ResourceStylingFields;
    IModelVisibilityV1_0_0 => IModelVisibility @ "1.0.0":
        imodel_visibility::v1_0_0::IModelVisibilityData, ResourceStylingFields;
    ScheduleSimulationV1_0_0 => ScheduleSimulation @ "1.0.0":
        schedule_simulation::v1_0_0::ScheduleSimulationData, ResourceStylingFields;
    CameraAnimationV1_0_0 => CameraAnimation @ "1.0.0":
        camera_animation::v1_0_0::CameraAnimationData, StandardFields;
    CutoutV1_0_0 => Cutout @ "1.0.0":
        cutout::v1_0_0::CutoutData, StandardFields;
    MaterialDecorationV1_0_0 => MaterialDecoration @ "1.0.0":
        material_decoration::v1_0_0::MaterialDecorationData, StandardFields;
    MovieV1_0_0 => Movie @ "1.0.0":
        movie::v1_0_0::MovieData, StandardFields;
    GoogleTilesStylingV1_0_0 => GoogleTilesStyling @ "1.0.0":
        google_tiles_styling::v1_0_0::GoogleTilesStylingData, StandardFields;
    ITwinDisplayStyleOptionsV1_0_0 => ITwinDisplayStyleOptions @ "1.0.0":
        itwin_display_style_options::v1_0_0::ITwinDisplayStyleOptionsData, StandardFields;
    UnrealAtmosphericStylingV1_0_0 => UnrealAtmosphericStyling @ "1.0.0":
        unreal_atmospheric_styling::v1_0_0::UnrealAtmosphericStylingData, StandardFields;
    RealityDataStylingV1_0_0 => RealityDataStyling @ "1.0.0":
        reality_data_styling::v1_0_0::RealityDataStylingData, ResourceStylingFields;
}

impl SchemaData {
    /// Parses the kind tag and decodes `data` into the shape registered for the pair
    pub fn resolve(kind: &str, version: &str, data: Value) -> Result<Self, SchemaError> {
        let descriptor = resolve(kind, version)?;
        Self::decode(descriptor.kind, version, data)
    }

    pub fn category(&self) -> SchemaCategory {
        self.kind().category()
    }
}

pub fn descriptors() -> &'static [SchemaDescriptor] {
    DESCRIPTORS
}

pub fn versions(kind: SchemaKind) -> impl Iterator<Item = &'static str> {
    DESCRIPTORS
        .iter()
        .filter(move |descriptor| descriptor.kind == kind)
        .map(|descriptor| descriptor.version)
}

pub fn resolve(kind: &str, version: &str) -> Result<&'static SchemaDescriptor, SchemaError> {
    let kind =
        SchemaKind::from_str(kind).map_err(|_| SchemaError::UnknownSchemaKind(kind.to_owned()))?;

    DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.kind == kind && descriptor.version == version)
        .ok_or_else(|| SchemaError::UnknownSchemaVersion {
            kind,
            version: version.to_owned(),
        })
}

pub fn classify_category(kind: SchemaKind) -> SchemaCategory {
    kind.category()
}

pub fn all_kinds() -> impl Iterator<Item = SchemaKind> {
    SchemaKind::iter()
}
