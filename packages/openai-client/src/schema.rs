//! Type-safe schema generation for OpenAI structured outputs.
//!
//! Strict mode needs every object closed (`additionalProperties: false`),
//! every property required, and no `$ref` indirection.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Types usable as OpenAI structured output.
///
/// Blanket-implemented for anything that is `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// OpenAI strict-mode compatible JSON schema for this type.
    fn openai_schema() -> Value {
        let mut value = serde_json::to_value(schema_for!(Self)).unwrap_or_default();

        close_objects(&mut value);

        let definitions = value.get("definitions").cloned();
        if let Some(defs) = definitions {
            inline_refs(&mut value, &defs);
        }

        if let Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
            map.remove("title");
        }

        value
    }

    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Restrict a top-level string property to a closed set of values.
///
/// Used when the allowed values come from runtime data rather than a Rust enum.
pub fn constrain_string_enum<I, S>(schema: &mut Value, property: &str, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<Value> = values.into_iter().map(|v| Value::String(v.into())).collect();

    if let Some(Value::Object(prop)) = schema
        .get_mut("properties")
        .and_then(|props| props.get_mut(property))
    {
        prop.insert("type".to_string(), Value::String("string".to_string()));
        prop.insert("enum".to_string(), Value::Array(allowed));
    }
}

fn close_objects(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if map.get("type") == Some(&Value::String("object".to_string())) {
                map.insert("additionalProperties".to_string(), Value::Bool(false));

                if let Some(Value::Object(props)) = map.get("properties") {
                    let keys = props.keys().cloned().map(Value::String).collect();
                    map.insert("required".to_string(), Value::Array(keys));
                }
            }

            for (_, v) in map.iter_mut() {
                close_objects(v);
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(close_objects),
        _ => {}
    }
}

fn inline_refs(value: &mut Value, definitions: &Value) {
    match value {
        Value::Object(map) => {
            let target = map
                .get("$ref")
                .and_then(Value::as_str)
                .and_then(|r| r.strip_prefix("#/definitions/"))
                .and_then(|name| definitions.get(name))
                .cloned();

            if let Some(def) = target {
                *value = def;
                inline_refs(value, definitions);
                return;
            }

            for (_, v) in map.iter_mut() {
                inline_refs(v, definitions);
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(|v| inline_refs(v, definitions)),
        _ => {}
    }
}
