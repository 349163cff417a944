//! Data shapes per kind, one module per published version.
//!
//! A published version is never edited; a changed shape gets a new module.

pub mod camera_animation;
pub mod cutout;
pub mod expression_styling;
pub mod google_tiles_styling;
pub mod imodel_visibility;
pub mod itwin_display_style_options;
pub mod layer;
pub mod material_decoration;
pub mod movie;
pub mod reality_data_styling;
pub mod repository_resource;
pub mod schedule_simulation;
pub mod unreal_atmospheric_styling;
pub mod view3d;
