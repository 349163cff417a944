use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of a scene
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
#[repr(transparent)]
pub struct SceneId(String);

impls_for_string_newtype!(SceneId);
