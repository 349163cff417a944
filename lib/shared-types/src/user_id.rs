use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Identifier of the user who created an entity
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserId(String);

impls_for_string_newtype!(UserId);
