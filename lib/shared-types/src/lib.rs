mod macros;

mod itwin_id;
mod scene_id;
mod scene_object_id;
mod user_id;

pub use itwin_id::ITwinId;
pub use scene_id::SceneId;
pub use scene_object_id::SceneObjectId;
pub use user_id::UserId;

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_string_newtype_roundtrip() {
        let id = SceneId::from_str("scene-1").unwrap();
        assert_eq!(id.as_str(), "scene-1");
        assert_eq!(id.to_string(), "scene-1");
        assert_eq!(String::from(id), "scene-1");
    }

    #[test]
    fn test_string_newtype_is_transparent_in_json() {
        let id: ITwinId = "itwin-1".into();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""itwin-1""#);
    }
}
