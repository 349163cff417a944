use thiserror::Error;

use super::kind::SchemaKind;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unknown schema kind: `{0}`")]
    UnknownSchemaKind(String),
    #[error("Unknown schema version `{version}` for kind `{kind}`")]
    UnknownSchemaVersion { kind: SchemaKind, version: String },
    #[error("Missing `{field}` required by kind `{kind}`")]
    MissingCategoryField {
        kind: SchemaKind,
        field: &'static str,
    },
    #[error("Data of an update must come with `kind` and `version`")]
    IncompleteUpdate,
    #[error("Expected schema `{expected}`, received `{actual}`")]
    SchemaMismatch { expected: String, actual: String },
    #[error("Data does not match schema `{kind}@{version}`: {source}")]
    InvalidSchemaData {
        kind: SchemaKind,
        version: String,
        source: serde_json::Error,
    },
    #[error("Data encoding error: `{0}`")]
    DataEncoding(#[source] serde_json::Error),
    #[error("Invalid JSON schema `{schema_ref}`: {reason}")]
    InvalidJsonSchema { schema_ref: String, reason: String },
}
