use std::collections::HashMap;

use serde_json::Value;

use super::error::SchemaError;
use super::registry::descriptors;

/// Validates payloads against JSON Schema documents keyed by `<kind>@<version>`
#[derive(Default)]
pub struct JsonSchemaValidationService {
    validators: HashMap<String, jsonschema::Validator>,
}

impl JsonSchemaValidationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service preloaded with the schema of every registered (kind, version)
    pub fn with_registered_schemas() -> Result<Self, SchemaError> {
        let mut service = Self::new();
        service.load_schemas()?;
        Ok(service)
    }

    pub fn load_schema(
        &mut self,
        schema_ref: impl Into<String>,
        schema: &Value,
    ) -> Result<(), SchemaError> {
        let schema_ref = schema_ref.into();
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidJsonSchema {
                schema_ref: schema_ref.clone(),
                reason: e.to_string(),
            })?;

        self.validators.insert(schema_ref, validator);
        Ok(())
    }

    pub fn load_schemas(&mut self) -> Result<(), SchemaError> {
        for descriptor in descriptors() {
            self.load_schema(descriptor.schema_ref(), &descriptor.json_schema())?;
        }
        Ok(())
    }

    pub fn is_loaded(&self, schema_ref: &str) -> bool {
        self.validators.contains_key(schema_ref)
    }

    /// Unknown schema references never validate
    pub fn validate(&self, schema_ref: &str, data: &Value) -> bool {
        match self.validators.get(schema_ref) {
            Some(validator) => validator.is_valid(data),
            None => {
                tracing::warn!(%schema_ref, "Validation against schema that was not loaded");
                false
            }
        }
    }

    pub fn validation_errors(&self, schema_ref: &str, data: &Value) -> Vec<String> {
        match self.validators.get(schema_ref) {
            Some(validator) => validator
                .iter_errors(data)
                .map(|e| format!("{}: {}", e.instance_path, e))
                .collect(),
            None => vec![format!("Schema `{schema_ref}` not loaded")],
        }
    }
}
