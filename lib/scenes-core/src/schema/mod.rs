//! Registry of scene object content shapes.
//!
//! Each registered (kind, version) pair has a marker type implementing
//! [`SchemaDefinition`], so a typed create/update/read of an unregistered pair
//! does not compile. Untyped input goes through [`registry::resolve`] and
//! [`SchemaData`], which reject unknown pairs with [`SchemaError`].

use std::fmt::Debug;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub mod category;
pub mod error;
pub mod kind;
pub mod kinds;
pub mod payload;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod test;

pub use category::{
    CategoryExtraFields, CategoryFields, ITwinScopedFields, ResourceStylingFields, SchemaCategory,
    StandardFields,
};
pub use error::SchemaError;
pub use kind::SchemaKind;
pub use payload::{build_create_payload, build_update_payload, check_payload};
pub use registry::*;
pub use validation::JsonSchemaValidationService;

pub trait SchemaDefinition: Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    const KIND: SchemaKind;
    const VERSION: &'static str;

    type Data: Serialize + DeserializeOwned + JsonSchema + Debug + Clone + PartialEq + Send + Sync;
    type Fields: CategoryFields;

    fn category() -> SchemaCategory {
        <Self::Fields as CategoryFields>::CATEGORY
    }

    fn schema_ref() -> String {
        registry::schema_ref(Self::KIND, Self::VERSION)
    }

    fn json_schema() -> Value {
        Value::from(schemars::schema_for!(Self::Data))
    }
}
