//! JSON Schema of the configuration file.

use super::TokenAnimationConfig;

/// Generates a JSON Schema for the Token Animation configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(TokenAnimationConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/ruipin/token-animation/main/token-animation.schema.json"
            ),
        );
    }

    schema
}

/// Generates the schema as a pretty-printed JSON string.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}
