use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of the iTwin (project) owning scenes and repository resources
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ITwinId(String);

impls_for_string_newtype!(ITwinId);
