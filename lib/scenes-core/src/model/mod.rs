pub mod link;
pub mod list_query;
pub mod primitives;
pub mod scene;
pub mod scene_object;
