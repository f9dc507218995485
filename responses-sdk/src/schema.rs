use schemars::JsonSchema;
use serde_json::Value;

/// Generate a structured-output JSON schema from a derive-annotated type.
///
/// Strict mode accepts only a subset of JSON Schema: annotate the type with
/// `#[serde(deny_unknown_fields)]` so the generated schema disallows
/// additional properties.
#[must_use]
pub fn json_schema_for<T: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema).unwrap_or_default()
}
