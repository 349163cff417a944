pub mod v1_0_0 {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_with::skip_serializing_none;

    use crate::model::primitives::{ColorDef, Id64};

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    pub struct ITwinDisplayStyleOptionsData {
        pub display_style_id: Option<Id64>,
        pub render_mode: Option<RenderMode>,
        pub background_color: Option<ColorDef>,
        pub monochrome_color: Option<ColorDef>,
        pub show_ground_plane: Option<bool>,
        pub show_sky_box: Option<bool>,
        pub show_shadows: Option<bool>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
    pub enum RenderMode {
        Wireframe,
        HiddenLine,
        SolidFill,
        SmoothShade,
    }
}
